//! Sweep driver and console report lines

use std::io::{self, Write};
use std::time::Duration;

use tracing::error;

use crate::bench::engine;
use crate::core::types::{engineering, BenchResult, Measurement};

/// Doubling sweep sizes from `min_kib` through `max_kib` inclusive.
pub fn sweep_sizes(min_kib: u64, max_kib: u64) -> impl Iterator<Item = u64> {
    let mut next = Some(min_kib);
    std::iter::from_fn(move || {
        let current = next?;
        if current == 0 || current > max_kib {
            return None;
        }
        next = current.checked_mul(2);
        Some(current)
    })
}

/// Runs one measurement and prints its report line to stdout.
///
/// The size prefix is printed and flushed before the timed run, so progress
/// is visible during long measurements. On failure the stdout line is
/// terminated and the error returned for the caller to report.
pub fn run_single(size_kib: u64, min_duration: Duration) -> BenchResult<Measurement> {
    print!("Measuring {}B: ", engineering(size_kib << 10, false));
    let _ = io::stdout().flush();

    match engine::measure(size_kib, min_duration) {
        Ok(measurement) => {
            println!(
                "{}B/s",
                engineering(measurement.bytes_per_sec() as u64, true)
            );
            Ok(measurement)
        }
        Err(err) => {
            println!();
            Err(err)
        }
    }
}

/// Measures every sweep size in turn.
///
/// Individual allocation failures are reported to stderr and skipped; the
/// sweep itself always completes.
pub fn run_sweep(min_duration: Duration, min_kib: u64, max_kib: u64) {
    for size_kib in sweep_sizes(min_kib, max_kib) {
        if let Err(err) = run_single(size_kib, min_duration) {
            error!(size_kib, "measurement skipped");
            eprintln!("{err}");
        }
    }
}
