use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::openings::{BookEntry, OpeningBook};
use crate::search::{EvalWeights, Evaluator, SearchParams, Searcher};
use crate::board::COLS;

/// Engine configuration, loadable from JSON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchParams,
    pub weights: EvalWeights,
    /// Replaces the built-in opening table when present.
    pub book: Option<Vec<BookEntry>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { search: SearchParams::default(), weights: EvalWeights::default(), book: None }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`EngineConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.threads == 0 {
            return Err(ConfigError::Validation("search.threads must be >= 1".into()));
        }
        self.weights.validate().map_err(ConfigError::Validation)?;
        if let Some(book) = &self.book {
            for entry in book {
                if entry.column >= COLS || entry.moves.iter().any(|&c| c >= COLS) {
                    return Err(ConfigError::Validation(format!(
                        "book entry {:?} -> {} references a column outside the board",
                        entry.moves, entry.column
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn opening_book(&self) -> OpeningBook {
        match &self.book {
            Some(entries) => OpeningBook::from_entries(entries.iter().cloned()),
            None => OpeningBook::standard(),
        }
    }

    pub fn build_searcher(&self) -> Searcher {
        Searcher::new(self.search, Evaluator::new(self.weights), self.opening_book())
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        EngineConfig::default().validate().expect("default config should be valid");
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{ "search": { "depth": 4 } }"#).unwrap();
        assert_eq!(config.search.depth, 4);
        assert!(config.search.use_book);
        assert_eq!(config.weights, EvalWeights::default());
        assert!(config.book.is_none());
    }

    #[test]
    fn empty_json_uses_all_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn validation_rejects_zero_depth() {
        let mut config = EngineConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_threads() {
        let mut config = EngineConfig::default();
        config.search.threads = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_misordered_weights() {
        let mut config = EngineConfig::default();
        config.weights.open_three = 10_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_off_board_book_entry() {
        let mut config = EngineConfig::default();
        config.book = Some(vec![BookEntry { moves: vec![], column: 7 }]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn custom_book_replaces_standard() {
        let mut config = EngineConfig::default();
        config.book = Some(vec![BookEntry { moves: vec![], column: 2 }]);
        let book = config.opening_book();
        assert_eq!(book.len(), 1);
        assert_eq!(book.lookup(&[]), Some(2));
    }

    #[test]
    fn pretty_json_roundtrips() {
        let json = EngineConfig::default().to_json_pretty().unwrap();
        let config: EngineConfig = serde_json::from_str(&json).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn load_or_default_missing_file() {
        let config = EngineConfig::load_or_default(Path::new("nonexistent_c4bot_config.json")).unwrap();
        assert_eq!(config.search.depth, 7);
    }
}
