use serde::{Deserialize, Serialize};

use super::{win, BoardState, GameStatus, Player, COLS, ROWS};
use crate::error::SnapshotError;

/// Full engine state in transportable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub bitboards: [u64; 2],
    pub heights: [usize; COLS],
    pub move_history: Vec<usize>,
    pub current_player: Player,
    pub state: GameStatus,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub winning_mask: u64,
}

fn column_mask(col: usize) -> u64 { ((1u64 << ROWS) - 1) << BoardState::base(col) }

fn board_mask() -> u64 { (0..COLS).fold(0u64, |acc, c| acc | column_mask(c)) }

impl Snapshot {
    /// Structural consistency checks for snapshots that arrive from an
    /// untrusted source. Restoring does not call this on its own.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let [p1, p2] = self.bitboards;
        if p1 & p2 != 0 { return Err(SnapshotError::OverlappingBitboards); }
        let occupied = p1 | p2;
        if occupied & !board_mask() != 0 { return Err(SnapshotError::SentinelBitSet); }

        for col in 0..COLS {
            let base = BoardState::base(col);
            let height = self.heights[col];
            if height < base || height > base + ROWS {
                return Err(SnapshotError::HeightOutOfRange { column: col, height });
            }
            let fill = height - base;
            let expected = ((1u64 << fill) - 1) << base;
            if occupied & column_mask(col) != expected {
                return Err(SnapshotError::FloatingPiece { column: col });
            }
            let played = self.move_history.iter().filter(|&&c| c == col).count();
            if played != fill { return Err(SnapshotError::HistoryMismatch { column: col }); }
        }

        let pieces = occupied.count_ones() as usize;
        if pieces != self.move_history.len() {
            return Err(SnapshotError::MoveCountMismatch { history: self.move_history.len(), pieces });
        }

        let wins = |p: Player| win::has_four(self.bitboards[p.index()]);
        match self.state {
            GameStatus::Playing => {
                if self.game_over || self.winner.is_some() || self.winning_mask != 0 {
                    return Err(SnapshotError::InconsistentStatus("playing game carries a result".into()));
                }
                if wins(Player::One) || wins(Player::Two) {
                    return Err(SnapshotError::InconsistentStatus("playing game contains a line of four".into()));
                }
            }
            GameStatus::Win => {
                let Some(winner) = self.winner else {
                    return Err(SnapshotError::InconsistentStatus("win without a winner".into()));
                };
                let own = self.bitboards[winner.index()];
                if !self.game_over || !wins(winner) {
                    return Err(SnapshotError::InconsistentStatus("winner has no line of four".into()));
                }
                if self.winning_mask.count_ones() != 4 || self.winning_mask & !own != 0 {
                    return Err(SnapshotError::InconsistentStatus("winning mask is not a line owned by the winner".into()));
                }
            }
            GameStatus::Draw => {
                if !self.game_over || self.winner.is_some() || pieces != ROWS * COLS {
                    return Err(SnapshotError::InconsistentStatus("draw on a board that is not full".into()));
                }
            }
        }
        Ok(())
    }
}
