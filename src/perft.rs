use crate::board::GameEngine;

/// Counts move sequences of length `depth` from `game`. Finished games count
/// as a single leaf.
pub fn perft(game: &GameEngine, depth: u32) -> u64 {
    if depth == 0 || game.game_over() { return 1; }
    let mut nodes = 0u64;
    for col in game.get_valid_locations() {
        let mut child = game.clone();
        child.apply_move(col);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Per-root-column breakdown of [`perft`].
pub fn divide(game: &GameEngine, depth: u32) -> Vec<(usize, u64)> {
    if depth == 0 || game.game_over() { return Vec::new(); }
    game.get_valid_locations().into_iter().map(|col| {
        let mut child = game.clone();
        child.apply_move(col);
        (col, perft(&child, depth - 1))
    }).collect()
}
