// Connect Four engine: bitboard rules, heuristic evaluation and alpha-beta search
pub mod board;
pub mod config;
pub mod error;
pub mod openings;
pub mod perft;
pub mod scenarios;
pub mod search;
pub mod selfplay;

pub use board::{Cell, GameEngine, GameStatus, Player, Snapshot, COLS, ROWS};
pub use error::{ConfigError, MoveError, SnapshotError};
pub use search::{SearchParams, SearchResult, Searcher};
