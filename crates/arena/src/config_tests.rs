use super::*;
use rand::RngCore;

#[test]
fn test_defaults() {
    let s = Settings::default();
    assert_eq!(s.username, "Player");
    assert_eq!(s.store_path, PathBuf::from("magic_chess_ledger.json"));
    assert_eq!(s.bot_delay(), Duration::from_millis(500));
    assert_eq!(s.default_difficulty.level(), 1);
    assert_eq!(s.seed, None);
    assert_eq!((s.max_plies, s.games), (400, 10));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let s = Settings::from_toml_str(
        r#"
        username = "morgana"
        default_difficulty = 8
        seed = 42
        "#,
    )
    .unwrap();
    assert_eq!(s.username, "morgana");
    assert_eq!(s.default_difficulty.level(), 8);
    assert_eq!(s.seed, Some(42));
    assert_eq!(s.bot_delay_ms, 500);
    assert_eq!(s.games, 10);
}

#[test]
fn test_bad_difficulty_is_rejected() {
    let err = Settings::from_toml_str("default_difficulty = 11").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("magic-chess-settings-that-does-not-exist.toml");
    assert_eq!(Settings::load_or_default(&path).unwrap(), Settings::default());
    assert!(matches!(Settings::load(&path), Err(ConfigError::Io { .. })));
}

#[test]
fn test_seeded_rng_repeats() {
    let s = Settings {
        seed: Some(9),
        ..Settings::default()
    };
    assert_eq!(s.rng().next_u64(), s.rng().next_u64());
}
