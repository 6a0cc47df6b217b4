use std::fmt;

use super::{win, BoardState, Cell, GameStatus, Player, Snapshot, COLS, ROWS};
use crate::error::{MoveError, SnapshotError};

/// Live game: board plus turn, history and result bookkeeping.
///
/// Mutated only through [`GameEngine::apply_move`]; `clone` yields a fully
/// independent copy that search code can play forward freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: BoardState,
    move_history: Vec<usize>,
    move_count: usize,
    current_player: Player,
    status: GameStatus,
    game_over: bool,
    winner: Option<Player>,
    winning_mask: u64,
}

impl Default for GameEngine {
    fn default() -> Self { Self::new(Player::One) }
}

impl GameEngine {
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: BoardState::new(),
            move_history: Vec::with_capacity(ROWS * COLS),
            move_count: 0,
            current_player: starting_player,
            status: GameStatus::Playing,
            game_over: false,
            winner: None,
            winning_mask: 0,
        }
    }

    /// Plays `moves` in order from an empty board with player one to move.
    pub fn from_moves(moves: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::default();
        for &col in moves { game.try_apply_move(col)?; }
        Ok(game)
    }

    pub fn reset(&mut self, starting_player: Player) { *self = Self::new(starting_player); }

    pub fn is_valid_location(&self, col: usize) -> bool { self.board.is_playable(col) }

    /// Legal columns in ascending order; empty once the board is full.
    pub fn get_valid_locations(&self) -> Vec<usize> { self.board.playable_columns() }

    pub fn try_apply_move(&mut self, col: usize) -> Result<(), MoveError> {
        if self.game_over { return Err(MoveError::GameOver); }
        if col >= COLS { return Err(MoveError::ColumnOutOfRange { column: col }); }
        if !self.board.is_playable(col) { return Err(MoveError::ColumnFull { column: col }); }

        let mover = self.current_player;
        self.board.drop_piece(col, mover);
        self.move_history.push(col);
        self.move_count += 1;

        if let Some(mask) = win::winning_mask(self.board.bitboard(mover)) {
            self.status = GameStatus::Win;
            self.game_over = true;
            self.winner = Some(mover);
            self.winning_mask = mask;
        } else if self.move_count == ROWS * COLS {
            self.status = GameStatus::Draw;
            self.game_over = true;
            self.winner = None;
        } else {
            self.current_player = mover.other();
        }
        Ok(())
    }

    /// Drops a piece for the side to move. Returns `false` without touching
    /// any state when the column is out of range, full, or the game is over.
    pub fn apply_move(&mut self, col: usize) -> bool { self.try_apply_move(col).is_ok() }

    pub fn check_win(&self, player: Player) -> bool { win::check_win(&self.board, player) }

    pub fn board(&self) -> &BoardState { &self.board }
    pub fn bitboard(&self, player: Player) -> u64 { self.board.bitboard(player) }
    pub fn heights(&self) -> [usize; COLS] { self.board.heights() }
    pub fn cell(&self, row: usize, col: usize) -> Cell { self.board.cell(row, col) }
    pub fn current_player(&self) -> Player { self.current_player }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn game_over(&self) -> bool { self.game_over }
    pub fn winner(&self) -> Option<Player> { self.winner }
    pub fn winning_mask(&self) -> u64 { self.winning_mask }
    pub fn move_history(&self) -> &[usize] { &self.move_history }
    pub fn move_count(&self) -> usize { self.move_count }
    pub fn last_move(&self) -> Option<usize> { self.move_history.last().copied() }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            bitboards: self.board.bitboards,
            heights: self.board.heights,
            move_history: self.move_history.clone(),
            current_player: self.current_player,
            state: self.status,
            game_over: self.game_over,
            winner: self.winner,
            winning_mask: self.winning_mask,
        }
    }

    /// Restores every field from `snap` as-is. No consistency checks are made;
    /// see [`GameEngine::try_from_snapshot`] for input that crosses a trust boundary.
    pub fn from_snapshot(snap: Snapshot) -> Self {
        Self {
            board: BoardState { bitboards: snap.bitboards, heights: snap.heights },
            move_count: snap.move_history.len(),
            move_history: snap.move_history,
            current_player: snap.current_player,
            status: snap.state,
            game_over: snap.game_over,
            winner: snap.winner,
            winning_mask: snap.winning_mask,
        }
    }

    pub fn try_from_snapshot(snap: Snapshot) -> Result<Self, SnapshotError> {
        snap.validate()?;
        Ok(Self::from_snapshot(snap))
    }
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            write!(f, "|")?;
            for col in 0..COLS {
                let c = match self.cell(row, col) {
                    Cell::Occupied(p) => p.symbol(),
                    Cell::Empty => '.',
                };
                write!(f, " {} |", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "|")?;
        for col in 0..COLS { write!(f, " {} |", col)?; }
        Ok(())
    }
}
