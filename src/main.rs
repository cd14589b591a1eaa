use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, Level};

use membw::bench::sweep;
use membw::config;
use membw::simd;

fn main() -> ExitCode {
    let code = match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    };
    prompt_exit();
    code
}

fn run() -> Result<()> {
    let config = config::load_config();

    // Initialize logging; measurement lines own stdout, diagnostics go to
    // stderr
    let level = config.logging.level.parse().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    config::validate_config(&config).context("invalid configuration")?;

    info!("membw v{}", membw::core::VERSION);
    info!(
        "SIMD backend: {} ({} bytes/vector)",
        simd::NAME,
        simd::VECTOR_WIDTH
    );

    let args: Vec<String> = std::env::args().skip(1).collect();

    // Non-numeric arguments parse as 0, matching the original tool's atoll
    let size_kib: u64 = args.first().map(|s| s.parse().unwrap_or(0)).unwrap_or(0);
    let duration_ns: u64 = args
        .get(1)
        .map(|s| s.parse().unwrap_or(config.bench.default_duration_ns))
        .unwrap_or(config.bench.default_duration_ns);
    let min_duration = Duration::from_nanos(duration_ns);

    // Size 0 selects the full sweep, same as no arguments
    if size_kib == 0 {
        sweep::run_sweep(
            min_duration,
            config.bench.sweep_min_kib,
            config.bench.sweep_max_kib,
        );
        return Ok(());
    }

    sweep::run_single(size_kib, min_duration)?;
    Ok(())
}

/// Keeps the console window open when launched outside a terminal; a closed
/// stdin returns immediately.
fn prompt_exit() {
    println!("Press ENTER to exit");
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}
