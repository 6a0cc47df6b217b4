use std::path::PathBuf;

/// Reasons a drop is rejected. A rejected drop never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board")]
    ColumnOutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameOver,
}

/// Structural problems found by [`crate::board::Snapshot::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("both players occupy the same cell")]
    OverlappingBitboards,

    #[error("a sentinel or off-board bit is set")]
    SentinelBitSet,

    #[error("height {height} out of range for column {column}")]
    HeightOutOfRange { column: usize, height: usize },

    #[error("occupancy of column {column} does not match its height")]
    FloatingPiece { column: usize },

    #[error("move history does not match the pieces in column {column}")]
    HistoryMismatch { column: usize },

    #[error("history has {history} moves but the board holds {pieces} pieces")]
    MoveCountMismatch { history: usize, pieces: usize },

    #[error("inconsistent game status: {0}")]
    InconsistentStatus(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_error_display() {
        assert_eq!(MoveError::ColumnFull { column: 3 }.to_string(), "column 3 is full");
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
    }

    #[test]
    fn snapshot_error_display() {
        let err = SnapshotError::MoveCountMismatch { history: 3, pieces: 2 };
        assert_eq!(err.to_string(), "history has 3 moves but the board holds 2 pieces");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(err.to_string(), "config validation error: search.depth must be >= 1");
    }
}
