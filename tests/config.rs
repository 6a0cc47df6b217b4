use c4bot::config::EngineConfig;
use c4bot::search::MoveSource;
use c4bot::{ConfigError, GameEngine, Player};
use std::fs::{create_dir_all, write};
use std::path::Path;

fn scratch(name: &str, body: &str) -> std::path::PathBuf {
    let dir = Path::new("target/config_test");
    create_dir_all(dir).unwrap();
    let path = dir.join(name);
    write(&path, body).unwrap();
    path
}

#[test]
fn load_from_file() {
    let path = scratch("ok.json", r#"{ "search": { "depth": 3, "use_book": false, "seed": 9 } }"#);
    let cfg = EngineConfig::load(&path).unwrap();
    assert_eq!(cfg.search.depth, 3);
    assert_eq!(cfg.search.seed, Some(9));

    let mut s = cfg.build_searcher();
    let res = s.search(&GameEngine::default(), Player::One, cfg.search.depth);
    assert_eq!(res.source, MoveSource::Search);
}

#[test]
fn custom_book_from_file() {
    let path = scratch("book.json", r#"{ "book": [ { "moves": [], "column": 1 } ] }"#);
    let cfg = EngineConfig::load(&path).unwrap();
    let mut s = cfg.build_searcher();
    assert_eq!(s.find_best_move(&GameEngine::default(), Player::One, 2), Some(1));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let path = scratch("bad.json", "{ search: ");
    assert!(matches!(EngineConfig::load(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn invalid_values_fail_validation() {
    let path = scratch("zero.json", r#"{ "search": { "depth": 0 } }"#);
    assert!(matches!(EngineConfig::load(&path), Err(ConfigError::Validation(_))));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = EngineConfig::load(Path::new("target/config_test/does_not_exist.json")).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
    assert!(err.to_string().contains("does_not_exist.json"));
}
