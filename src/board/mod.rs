pub mod bitboard;
pub mod game;
pub mod snapshot;
pub mod win;

use serde::{Deserialize, Serialize};

pub use bitboard::BoardState;
pub use game::GameEngine;
pub use snapshot::Snapshot;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WINDOW: usize = 4;

/// Bits per column: `ROWS` playable cells plus one always-empty sentinel.
pub const COL_BITS: usize = ROWS + 1;
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Win,
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_player_alternates() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn board_fits_in_a_u64() {
        assert!(COLS * COL_BITS <= 64);
    }
}
