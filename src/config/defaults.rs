//! Default configuration values for membw

/// Default minimum measurement duration: one second.
pub const DEFAULT_DURATION_NS: u64 = 1_000_000_000;

/// Smallest sweep working-set size in KiB.
pub const SWEEP_MIN_KIB: u64 = 1;

/// Largest sweep working-set size in KiB (1 GiB).
pub const SWEEP_MAX_KIB: u64 = 1_048_576;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
