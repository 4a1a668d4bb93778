//! Command-line interface for fixture-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # Emit 1000 random fixture records to stdout
//! fixture-gen
//!
//! # Reproducible output with an explicit seed
//! fixture-gen --seed 42
//!
//! # Write 50000 records to a file
//! fixture-gen --count 50000 -o fixtures.ndjson
//! ```
//!
//! Every line of output is an independently valid JSON object. Logging goes
//! to stderr (enable with `RUST_LOG=info`), so stdout stays pure NDJSON.

use anyhow::Context;
use clap::Parser;
use fixture_emitter::{EmitArgs, NdjsonEmitter};
use rand::Rng;

#[derive(Parser)]
#[command(name = "fixture-gen")]
#[command(about = "Generates randomized JSON fixture records as NDJSON")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: EmitArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stderr keeps stdout free for the NDJSON stream
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // An explicit seed makes the run reproducible; otherwise draw one and
    // log it so the run can still be replayed.
    let seed = cli.args.seed.unwrap_or_else(|| rand::rng().random());

    tracing::info!(
        "Generating {} fixture records (seed={})",
        cli.args.count,
        seed
    );

    let mut emitter = NdjsonEmitter::new(seed);

    let metrics = match &cli.args.output {
        Some(path) => emitter
            .emit_to_file(path, cli.args.count)
            .with_context(|| format!("Failed to write fixtures to {path:?}"))?,
        None => {
            let stdout = std::io::stdout();
            emitter
                .emit(stdout.lock(), cli.args.count)
                .context("Failed to write fixtures to stdout")?
        }
    };

    tracing::info!(
        "Emitted {} records, {} bytes in {:?} ({:.2} records/sec)",
        metrics.records_written,
        metrics.bytes_written,
        metrics.total_duration,
        metrics.records_per_second()
    );

    Ok(())
}
