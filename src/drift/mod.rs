//! Drift detection: two-sample statistical tests against a stored baseline.
//!
//! Numeric features are compared with a two-sample Kolmogorov-Smirnov
//! test, categorical features with a Chi-square test on frequency tables.
//! Per-feature drift scores aggregate into one overall score, classified
//! as Normal/Warning/Critical against two configured thresholds.

mod detector;
pub(crate) mod statistical;
mod types;


// Re-export all public types
pub use detector::{DriftDetector, DEFAULT_CRITICAL_THRESHOLD, DEFAULT_WARNING_THRESHOLD};
pub use types::{DriftResult, FeatureDriftResult, Severity, TestKind};

// Re-export statistical functions for testing/advanced use
pub use statistical::{chi_square_p_value, erf, ks_p_value, ks_statistic};
