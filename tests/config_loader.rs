mod common;

use common::temp_config;
use guess_number::config::{Config, ConfigError, LoggingConfig, UiConfig, MAX_TOAST_SECONDS};
use std::path::{Path, PathBuf};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 50);
    assert_eq!(config.ui.toast_seconds, 3);
    assert!(config.ui.confetti);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("guess-number/config.toml"));
}

#[test]
fn test_default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/definitely/not/here/config.toml"))
        .expect("missing file is not an error");
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_yields_defaults() {
    let (_dir, path) = temp_config("");
    let config = Config::load_from(&path).expect("empty file is valid");
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = temp_config(
        r#"[ui]
tick_rate_ms = 100
toast_seconds = 5
confetti = false

[logging]
level = "guess_number=debug"
file = "/tmp/guess-number.log"
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(
        config,
        Config {
            ui: UiConfig {
                tick_rate_ms: 100,
                toast_seconds: 5,
                confetti: false,
            },
            logging: LoggingConfig {
                level: "guess_number=debug".to_string(),
                file: Some(PathBuf::from("/tmp/guess-number.log")),
            },
        }
    );
}

#[test]
fn test_partial_section_fills_defaults() {
    let (_dir, path) = temp_config("[ui]\nconfetti = false\n");
    let config = Config::load_from(&path).expect("valid config");
    assert!(!config.ui.confetti);
    assert_eq!(config.ui.tick_rate_ms, 50);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[ui\nconfetti = ");
    let err = Config::load_from(&path).expect_err("broken toml");
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = \"fast\"\n");
    let err = Config::load_from(&path).expect_err("wrong type");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).expect_err("zero tick rate");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_zero_toast_lifetime_fails_validation() {
    let mut config = Config::default();
    config.ui.toast_seconds = 0;
    let err = config.validate().expect_err("zero toast lifetime");
    assert!(err.to_string().contains("toast_seconds"));
}

#[test]
fn test_toast_lifetime_is_capped() {
    let mut config = Config::default();
    config.ui.toast_seconds = MAX_TOAST_SECONDS;
    assert!(config.validate().is_ok());

    config.ui.toast_seconds = MAX_TOAST_SECONDS + 1;
    let err = config.validate().expect_err("toast lifetime over cap");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("toast_seconds"));
}

#[test]
fn test_huge_toast_lifetime_in_file_fails_validation() {
    let (_dir, path) = temp_config("[ui]\ntoast_seconds = 9223372036854775807\n");
    let err = Config::load_from(&path).expect_err("absurd toast lifetime");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_bad_log_level_fails_validation() {
    let mut config = Config::default();
    config.logging.level = "guess_number=loud".to_string();
    let err = config.validate().expect_err("bad filter");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_directory_path_is_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Config::load_from(dir.path()).expect_err("directory");
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
