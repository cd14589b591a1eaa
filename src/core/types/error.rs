//! Error types for membw

use thiserror::Error;

/// Main error type for benchmark operations
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Memory allocation failed for {bytes} bytes: {reason}")]
    AllocationFailed { bytes: usize, reason: String },

    #[error("Invalid buffer layout: {0}")]
    InvalidLayout(String),
}

/// Result type alias for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;

impl BenchError {
    /// Creates an allocation failure carrying the OS error description
    pub fn allocation_failed(bytes: usize, reason: impl Into<String>) -> Self {
        BenchError::AllocationFailed {
            bytes,
            reason: reason.into(),
        }
    }

    /// Creates an allocation failure from the last OS error
    pub fn allocation_failed_os(bytes: usize) -> Self {
        BenchError::allocation_failed(bytes, std::io::Error::last_os_error().to_string())
    }
}
