//! Derivar CLI
//!
//! Drift-detection entry point for the derivar library.
//!
//! # Usage
//!
//! ```bash
//! # Capture a baseline from reference data
//! derivar baseline training_data.json --output baseline_distribution.json
//!
//! # Check a production batch against the baseline
//! derivar check batch.json --baseline baseline_distribution.json
//!
//! # Machine-readable output, custom thresholds
//! derivar check batch.json --baseline baseline_distribution.json \
//!     --format json --warning-threshold 0.1 --critical-threshold 0.2
//! ```

use clap::Parser;
use derivar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
