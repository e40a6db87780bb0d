//! Config persistence tests

use tabpane_config::{Config, ConfigError, LogLevel};
use tempfile::TempDir;

#[test]
fn test_save_then_load_preserves_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.yaml");

    let config = Config {
        min_pane_width: 100.0,
        resize_step: 0.1,
        log_level: LogLevel::Debug,
        ..Config::default()
    };
    config.save_to(&path).expect("save");

    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded, config);
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn test_load_invalid_yaml_is_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "min_pane_width: [not, a, number\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_out_of_range_is_validation_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "resize_step: 1.5\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = Config::load_from(&temp_dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io(_))
    ));
}
