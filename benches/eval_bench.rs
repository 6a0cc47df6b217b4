use criterion::{criterion_group, criterion_main, Criterion, black_box};
use c4bot::board::win;
use c4bot::search::Evaluator;
use c4bot::{GameEngine, Player};

fn bench_eval(c: &mut Criterion) {
    let g = GameEngine::from_moves(&[3, 3, 4, 2, 5, 4, 2, 5, 1, 6]).unwrap();
    let e = Evaluator::default();
    c.bench_function("evaluate_midgame", |ben| {
        ben.iter(|| {
            let v = e.evaluate(black_box(&g), Player::One);
            black_box(v)
        })
    });
    let bb = g.bitboard(Player::One);
    c.bench_function("has_four_midgame", |ben| {
        ben.iter(|| black_box(win::has_four(black_box(bb))))
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
