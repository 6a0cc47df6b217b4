use rand::Rng;

use crate::board::GameEngine;

/// Uniformly random entry of `columns`, or `None` when there is nothing to pick.
pub fn random_column<R: Rng + ?Sized>(columns: &[usize], rng: &mut R) -> Option<usize> {
    if columns.is_empty() { return None; }
    Some(columns[rng.gen_range(0..columns.len())])
}

/// Uniformly random legal drop for the side to move. `None` once the game is
/// decided or the board is full.
pub fn random_legal_column<R: Rng + ?Sized>(game: &GameEngine, rng: &mut R) -> Option<usize> {
    if game.game_over() { return None; }
    random_column(&game.get_valid_locations(), rng)
}
