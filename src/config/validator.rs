//! Configuration validator for membw
//!
//! Validates configuration values to ensure they are within acceptable ranges.

use super::loader::{BenchConfig, Config, ConfigError, LoggingConfig};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_bench(&config.bench)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    /// Validates measurement configuration
    fn validate_bench(bench: &BenchConfig) -> Result<(), ConfigError> {
        if bench.default_duration_ns == 0 {
            return Err(ConfigError::Invalid(
                "Measurement duration cannot be 0".to_string(),
            ));
        }

        // Power-of-two bounds keep every swept size a multiple of the
        // vector pair stride and of the 8-byte fill stride
        if bench.sweep_min_kib == 0 || !bench.sweep_min_kib.is_power_of_two() {
            return Err(ConfigError::Invalid(
                "Sweep minimum must be a power of 2 KiB".to_string(),
            ));
        }

        if bench.sweep_max_kib == 0 || !bench.sweep_max_kib.is_power_of_two() {
            return Err(ConfigError::Invalid(
                "Sweep maximum must be a power of 2 KiB".to_string(),
            ));
        }

        if bench.sweep_min_kib > bench.sweep_max_kib {
            return Err(ConfigError::Invalid(
                "Sweep minimum cannot exceed sweep maximum".to_string(),
            ));
        }

        Ok(())
    }

    /// Validates logging configuration
    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        logging
            .level
            .parse::<tracing::Level>()
            .map_err(|_| ConfigError::Invalid(format!("Unknown log level: {}", logging.level)))?;
        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}
