//! # Derivar
//!
//! Statistical data-drift detection for production model monitoring.
//!
//! Capture a baseline snapshot from reference data, then compare
//! incoming batches against it: numeric features with a two-sample
//! Kolmogorov-Smirnov test, categorical features with a Chi-square test
//! on frequency tables. Per-feature drift scores aggregate into one
//! overall score classified as Normal, Warning or Critical.
//!
//! ```no_run
//! use derivar::{Dataset, DriftDetector};
//!
//! # fn main() -> derivar::Result<()> {
//! let mut reference = Dataset::new();
//! reference.insert_numeric("text_length", (0..1000).map(|i| 80.0 + (i % 40) as f64));
//! reference.insert_labels("language", (0..1000).map(|i| if i % 4 == 0 { "en" } else { "pt" }));
//!
//! let mut detector = DriftDetector::default();
//! detector.save_baseline(&reference, "baseline_distribution.json")?;
//!
//! let mut batch = Dataset::new();
//! batch.insert_numeric("text_length", (0..200).map(|i| 120.0 + (i % 40) as f64));
//! batch.insert_labels("language", (0..200).map(|i| if i % 2 == 0 { "en" } else { "es" }));
//!
//! let result = detector.detect_drift(&batch, None)?;
//! println!("{}", derivar::report::render(&result));
//! # Ok(())
//! # }
//! ```

pub mod baseline;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod drift;
mod error;
pub mod report;

pub use baseline::{BaselineSnapshot, FeatureStats};
pub use dataset::{Dataset, FeatureKind, FeatureValue};
pub use drift::{DriftDetector, DriftResult, FeatureDriftResult, Severity, TestKind};
pub use error::{DriftError, Result};
