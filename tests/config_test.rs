//! Integration tests for configuration loading and validation

use membw::config::{validate_config, Config, ConfigError, ConfigLoader};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_defaults_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("membw.toml");

    let config = Config::default();
    let loader = ConfigLoader::new(&path);
    loader.save(&config).unwrap();

    let loaded = loader.load().unwrap();
    assert_eq!(
        loaded.bench.default_duration_ns,
        config.bench.default_duration_ns
    );
    assert_eq!(loaded.bench.sweep_min_kib, config.bench.sweep_min_kib);
    assert_eq!(loaded.bench.sweep_max_kib, config.bench.sweep_max_kib);
    assert_eq!(loaded.logging.level, config.logging.level);
}

#[test]
fn test_partial_file_gets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("membw.toml");
    std::fs::write(&path, "[bench]\nsweep_max_kib = 256\n").unwrap();

    let config = ConfigLoader::new(&path).load().unwrap();
    assert_eq!(config.bench.sweep_max_kib, 256);
    assert_eq!(config.bench.sweep_min_kib, 1);
    assert_eq!(config.bench.default_duration_ns, 1_000_000_000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_file_is_not_fatal() {
    let loader = ConfigLoader::new("does-not-exist.toml");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));

    let config = loader.load_or_default();
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validator_rejects_bad_values() {
    let mut config = Config::default();
    config.bench.sweep_max_kib = 1000;
    assert!(matches!(
        validate_config(&config),
        Err(ConfigError::Invalid(_))
    ));

    let mut config = Config::default();
    config.bench.default_duration_ns = 0;
    assert!(validate_config(&config).is_err());

    let mut config = Config::default();
    config.logging.level = "shouting".to_string();
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_loaded_overrides_feed_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("membw.toml");
    std::fs::write(&path, "[bench]\nsweep_min_kib = 48\n").unwrap();

    let config = ConfigLoader::new(&path).load().unwrap();
    // Parsing succeeds; validation is where the bad bound is caught
    assert!(validate_config(&config).is_err());
}
