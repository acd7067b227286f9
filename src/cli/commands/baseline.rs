//! `baseline` command: capture a reference snapshot from a dataset.

use crate::cli::logging::{log, LogLevel};
use crate::config::BaselineArgs;
use crate::dataset::Dataset;
use crate::drift::DriftDetector;
use crate::error::Result;

pub fn run_baseline(args: &BaselineArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        true,
        &format!("Reading reference data from {}", args.input.display()),
    );
    let dataset = Dataset::from_json_file(&args.input)?;

    let mut detector = DriftDetector::default();
    let snapshot = detector.save_baseline(&dataset, &args.output)?;

    log(
        level,
        false,
        &format!(
            "Baseline saved to {} ({} samples, {} features)",
            args.output.display(),
            snapshot.n_samples,
            snapshot.stats.len()
        ),
    );
    for (name, stats) in &snapshot.stats {
        log(level, true, &format!("  {name}: {}", stats.kind()));
    }

    Ok(())
}
