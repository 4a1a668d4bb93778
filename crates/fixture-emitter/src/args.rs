//! CLI argument definitions for fixture emission.

use clap::Args;
use std::path::PathBuf;

/// Arguments controlling fixture generation and emission.
#[derive(Args, Clone, Debug)]
pub struct EmitArgs {
    /// Number of records to generate
    #[arg(long, default_value = "1000")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path (defaults to standard output)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
