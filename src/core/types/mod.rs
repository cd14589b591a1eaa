//! Fundamental types for membw

mod error;
mod measurement;
mod units;

pub use error::{BenchError, BenchResult};
pub use measurement::Measurement;
pub use units::engineering;
