//! Configuration module for membw
//!
//! Provides configuration loading, validation, and default settings.

pub mod defaults;
mod loader;
mod validator;

pub use loader::{
    load_config, BenchConfig, Config, ConfigError, ConfigLoader, LoggingConfig, CONFIG_FILE,
};
pub use validator::{validate_config, ConfigValidator};

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_module_exports() {
        // Test that we can access all exported items
        let config = Config::default();
        let _loader = ConfigLoader::new("test.toml");
        assert!(validate_config(&config).is_ok());

        let result: ConfigResult<u64> = Ok(1);
        assert!(result.is_ok());

        let error_result: ConfigResult<u64> = Err(ConfigError::Invalid("test".to_string()));
        assert!(error_result.is_err());
    }

    #[test]
    fn test_load_config_falls_back_to_defaults() {
        // No membw.toml in the test working directory
        let config = load_config();
        assert_eq!(config.bench.sweep_min_kib, defaults::SWEEP_MIN_KIB);
    }
}
