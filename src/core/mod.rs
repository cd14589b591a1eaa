//! Core module containing fundamental types for membw
//!
//! This module provides the foundational building blocks used throughout
//! the benchmark: the measurement record, the engineering-notation
//! formatter, and the error taxonomy.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{engineering, BenchError, BenchResult, Measurement};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
