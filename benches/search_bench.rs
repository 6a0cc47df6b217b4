use criterion::{criterion_group, criterion_main, Criterion, black_box};
use c4bot::search::{Evaluator, SearchParams, Searcher};
use c4bot::openings::OpeningBook;
use c4bot::GameEngine;

fn bench_search(c: &mut Criterion) {
    let g = GameEngine::from_moves(&[3, 3, 4, 4, 2, 2]).unwrap();
    for depth in [4u32, 6] {
        c.bench_function(&format!("search_depth_{}_midgame", depth), |ben| {
            ben.iter(|| {
                let p = SearchParams { depth, use_book: false, seed: Some(7), ..SearchParams::default() };
                let mut s = Searcher::new(p, Evaluator::default(), OpeningBook::empty());
                let r = s.search(black_box(&g), g.current_player(), depth);
                black_box(r.stats.nodes)
            })
        });
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
