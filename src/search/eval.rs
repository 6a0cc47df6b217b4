use serde::{Deserialize, Serialize};

use crate::board::{Cell, GameEngine, Player, CENTER_COL, COLS, ROWS, WINDOW};

/// Terminal scores. Dominates anything the heuristic can produce at a
/// non-terminal node.
pub const WIN_SCORE: i64 = 100_000_000_000;
pub const LOSS_SCORE: i64 = -WIN_SCORE;
pub const DRAW_SCORE: i64 = 0;

/// Window weights. Must keep `win >> |block| > open_three >> open_two >> center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub win: i64,
    pub block: i64,
    pub open_three: i64,
    pub open_two: i64,
    pub center: i64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            win: 10_000_000_000,
            block: -6_000_000,
            open_three: 5_000,
            open_two: 300,
            center: 10,
        }
    }
}

impl EvalWeights {
    pub fn validate(&self) -> Result<(), String> {
        if self.block >= 0 { return Err("weights.block must be negative".into()); }
        if self.center <= 0 { return Err("weights.center must be > 0".into()); }
        if self.open_two <= self.center { return Err("weights.open_two must exceed weights.center".into()); }
        if self.open_three <= self.open_two { return Err("weights.open_three must exceed weights.open_two".into()); }
        if self.block.abs() <= self.open_three { return Err("|weights.block| must exceed weights.open_three".into()); }
        if self.win <= self.block.abs() { return Err("weights.win must exceed |weights.block|".into()); }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self { Self { weights } }

    pub fn weights(&self) -> &EvalWeights { &self.weights }

    fn score_window(&self, window: [Cell; WINDOW], player: Player) -> i64 {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for c in window {
            match c {
                Cell::Empty => empty += 1,
                Cell::Occupied(p) if p == player => own += 1,
                Cell::Occupied(_) => opp += 1,
            }
        }
        let w = &self.weights;
        let mut score = 0;
        if own == 4 {
            score += w.win;
        } else if own == 3 && empty == 1 {
            score += w.open_three;
        } else if own == 2 && empty == 2 {
            score += w.open_two;
        }
        if opp == 3 && empty == 1 { score += w.block; }
        score
    }

    /// Static score of `game` from `player`'s point of view.
    pub fn evaluate(&self, game: &GameEngine, player: Player) -> i64 {
        let board = game.board();
        let mut score = board.column_count(player, CENTER_COL) as i64 * self.weights.center;

        let grid = board.to_grid();
        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - WINDOW {
                let w = [grid[row][col], grid[row][col + 1], grid[row][col + 2], grid[row][col + 3]];
                score += self.score_window(w, player);
            }
        }
        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - WINDOW {
                let w = [grid[row][col], grid[row + 1][col], grid[row + 2][col], grid[row + 3][col]];
                score += self.score_window(w, player);
            }
        }
        // Diagonal /
        for row in 0..=ROWS - WINDOW {
            for col in 0..=COLS - WINDOW {
                let w = [grid[row][col], grid[row + 1][col + 1], grid[row + 2][col + 2], grid[row + 3][col + 3]];
                score += self.score_window(w, player);
            }
        }
        // Diagonal \
        for row in WINDOW - 1..ROWS {
            for col in 0..=COLS - WINDOW {
                let w = [grid[row][col], grid[row - 1][col + 1], grid[row - 2][col + 2], grid[row - 3][col + 3]];
                score += self.score_window(w, player);
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_keep_their_ordering() {
        assert!(EvalWeights::default().validate().is_ok());
    }

    #[test]
    fn weights_out_of_order_are_rejected() {
        let mut w = EvalWeights::default();
        w.open_two = w.open_three;
        assert!(w.validate().is_err());
        let mut w = EvalWeights::default();
        w.block = 100;
        assert!(w.validate().is_err());
    }

    #[test]
    fn empty_board_scores_zero() {
        let g = GameEngine::default();
        assert_eq!(Evaluator::default().evaluate(&g, Player::One), 0);
    }

    #[test]
    fn center_piece_gets_the_center_bonus() {
        let g = GameEngine::from_moves(&[CENTER_COL]).unwrap();
        let e = Evaluator::default();
        assert_eq!(e.evaluate(&g, Player::One), e.weights().center);
    }

    #[test]
    fn open_three_of_opponent_dominates() {
        // Player two holds 4, 5, 6 on the bottom row; player one has minor shape only
        let g = GameEngine::from_moves(&[0, 4, 0, 5, 1, 6]).unwrap();
        let e = Evaluator::default();
        assert!(e.evaluate(&g, Player::One) < -5_000_000);
        assert!(e.evaluate(&g, Player::Two) > 0);
    }
}
