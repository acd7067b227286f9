//! `check` command: compare a batch against a stored baseline.

use crate::cli::logging::{log, LogLevel};
use crate::config::{CheckArgs, OutputFormat};
use crate::dataset::Dataset;
use crate::drift::{DriftDetector, Severity};
use crate::error::{DriftError, Result};
use crate::report;

pub fn run_check(args: &CheckArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        true,
        &format!("Reading current batch from {}", args.input.display()),
    );
    let dataset = Dataset::from_json_file(&args.input)?;

    let mut detector = DriftDetector::new(args.warning_threshold, args.critical_threshold)?;
    detector.load_baseline(&args.baseline)?;
    log(
        level,
        true,
        &format!("Baseline loaded from {}", args.baseline.display()),
    );

    let features: Option<Vec<&str>> = if args.features.is_empty() {
        None
    } else {
        Some(args.features.iter().map(String::as_str).collect())
    };
    let result = detector.detect_drift(&dataset, features.as_deref())?;

    match args.format {
        OutputFormat::Text => log(level, false, &report::render(&result)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| DriftError::Serialization(e.to_string()))?;
            println!("{json}");
        }
    }

    // Critical drift exits nonzero so schedulers can alert on it
    if result.severity == Severity::Critical {
        return Err(DriftError::CriticalDrift {
            score: result.overall_score,
            threshold: args.critical_threshold,
        });
    }
    Ok(())
}
