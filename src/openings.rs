//! Opening table for the first few plies.
//! Each entry maps an exact move history (columns, oldest first) to the column
//! to play next. Only exact full-history matches are used.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::GameEngine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub moves: Vec<usize>,
    pub column: usize,
}

/// Get the built-in opening entries
pub fn standard_entries() -> Vec<BookEntry> {
    let table: &[(&[usize], usize)] = &[
        (&[], 3),
        (&[3], 3),
        (&[3, 3], 3),
        (&[3, 2], 3),
        (&[3, 4], 3),
        (&[3, 3, 3], 2),
        (&[0], 3),
        (&[1], 3),
        (&[2], 3),
        (&[4], 3),
        (&[5], 3),
        (&[6], 3),
    ];
    table.iter().map(|&(moves, column)| BookEntry { moves: moves.to_vec(), column }).collect()
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<Vec<usize>, usize>,
}

impl OpeningBook {
    pub fn standard() -> Self { Self::from_entries(standard_entries()) }

    pub fn empty() -> Self { Self::default() }

    /// Later entries for the same history replace earlier ones.
    pub fn from_entries<I: IntoIterator<Item = BookEntry>>(entries: I) -> Self {
        Self { entries: entries.into_iter().map(|e| (e.moves, e.column)).collect() }
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Raw table lookup; the column may not be legal.
    pub fn lookup(&self, history: &[usize]) -> Option<usize> { self.entries.get(history).copied() }

    /// Book move for `game`, if its whole history is in the table and the
    /// stored column is still playable.
    pub fn suggest(&self, game: &GameEngine) -> Option<usize> {
        if game.game_over() { return None; }
        self.lookup(game.move_history()).filter(|&c| game.is_valid_location(c))
    }

    pub fn entries(&self) -> Vec<BookEntry> {
        let mut out: Vec<BookEntry> = self.entries.iter()
            .map(|(moves, &column)| BookEntry { moves: moves.clone(), column })
            .collect();
        out.sort_by(|a, b| a.moves.len().cmp(&b.moves.len()).then_with(|| a.moves.cmp(&b.moves)));
        out
    }
}
