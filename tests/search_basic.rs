use c4bot::openings::OpeningBook;
use c4bot::search::{Evaluator, MoveSource, SearchParams, Searcher};
use c4bot::{GameEngine, Player};

fn bookless(seed: u64) -> Searcher {
    let p = SearchParams { use_book: false, seed: Some(seed), ..SearchParams::default() };
    Searcher::new(p, Evaluator::default(), OpeningBook::empty())
}

#[test]
fn takes_a_horizontal_win() {
    let g = GameEngine::from_moves(&[0, 6, 1, 6, 2, 6]).unwrap();
    for depth in 1..=5 {
        let mut s = bookless(1);
        assert_eq!(s.find_best_move(&g, Player::One, depth), Some(3), "depth {depth}");
    }
}

#[test]
fn blocks_an_open_three() {
    let g = GameEngine::from_moves(&[0, 4, 0, 5, 1, 6]).unwrap();
    for depth in 1..=5 {
        let mut s = bookless(2);
        assert_eq!(s.find_best_move(&g, Player::One, depth), Some(3), "depth {depth}");
    }
}

#[test]
fn prefers_winning_over_blocking() {
    let g = GameEngine::from_moves(&[3, 0, 4, 1, 5, 2]).unwrap();
    let mut s = bookless(3);
    let res = s.search(&g, Player::One, 4);
    assert_eq!(res.column, Some(6));
    assert_eq!(res.source, MoveSource::Search);
    assert!(res.score > 0);
}

#[test]
fn blocks_a_vertical_three() {
    let g = GameEngine::from_moves(&[0, 3, 1, 3, 2, 3]).unwrap();
    let mut s = bookless(4);
    assert_eq!(s.find_best_move(&g, Player::One, 3), Some(3));
}

#[test]
fn book_answers_the_opening() {
    let mut s = Searcher::with_seed(5);
    let res = s.search(&GameEngine::default(), Player::One, 6);
    assert_eq!(res.column, Some(3));
    assert_eq!(res.source, MoveSource::Book);
    assert_eq!(res.stats.nodes, 0);
}

#[test]
fn finished_game_has_no_move() {
    let g = GameEngine::from_moves(&[0, 1, 0, 1, 0, 1, 0]).unwrap();
    let mut s = bookless(6);
    assert_eq!(s.find_best_move(&g, Player::Two, 4), None);
}

#[test]
fn always_returns_a_legal_column() {
    let g = GameEngine::from_moves(&[3, 3, 3, 3, 3, 3, 2, 4]).unwrap();
    for depth in 0..=4 {
        let mut s = bookless(depth as u64);
        let col = s.find_best_move(&g, g.current_player(), depth).unwrap();
        assert!(g.is_valid_location(col), "depth {depth} returned full column {col}");
    }
}

#[test]
fn same_seed_same_move() {
    let g = GameEngine::from_moves(&[3, 3, 4, 4, 2, 2]).unwrap();
    let a = bookless(9).search(&g, Player::One, 4);
    let b = bookless(9).search(&g, Player::One, 4);
    assert_eq!(a, b);
}

#[test]
fn search_does_not_touch_the_game() {
    let g = GameEngine::from_moves(&[3, 2, 3]).unwrap();
    let before = g.to_snapshot();
    let mut s = bookless(10);
    s.search(&g, Player::Two, 4);
    assert_eq!(g.to_snapshot(), before);
}

#[test]
fn deeper_search_visits_more_nodes() {
    let g = GameEngine::from_moves(&[3, 3, 4, 4, 2, 2]).unwrap();
    let shallow = bookless(11).search(&g, Player::One, 2).stats;
    let deep = bookless(11).search(&g, Player::One, 4).stats;
    assert!(deep.nodes > shallow.nodes);
    assert!(deep.cutoffs() > 0);
    assert_eq!(deep.max_depth_reached, 4);
}
