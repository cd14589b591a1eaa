//! membw library for measuring sustained memory read bandwidth
//!
//! The pipeline: allocate a vector-aligned buffer, fill it with
//! pseudo-random data so no page stays compressible or zero-backed, stream
//! through it with SIMD loads for an adaptive minimum duration, and report
//! the achieved bytes/second in engineering notation.

pub mod bench;
pub mod config;
pub mod core;
pub mod simd;

// Re-export main types from core module
pub use crate::core::types::{engineering, BenchError, BenchResult, Measurement};
