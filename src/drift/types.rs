//! Result types for drift detection.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistical test applied to a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    /// Two-sample KS test (numeric features)
    KolmogorovSmirnov,
    /// Chi-square test on frequency tables (categorical features)
    ChiSquare,
    /// No test could run: missing baseline sample or unusable values.
    /// Callers should read this as "untested", not as "no drift".
    None,
}

impl TestKind {
    /// Human-readable test name
    pub fn name(&self) -> &'static str {
        match self {
            TestKind::KolmogorovSmirnov => "Kolmogorov-Smirnov",
            TestKind::ChiSquare => "Chi-Square",
            TestKind::None => "none",
        }
    }
}

/// Severity classification for an overall drift score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    /// Classify an overall drift score against the two thresholds.
    ///
    /// Both bounds are inclusive: a score exactly at a threshold takes
    /// the higher severity.
    pub fn from_score(score: f64, warning_threshold: f64, critical_threshold: f64) -> Self {
        if score >= critical_threshold {
            Severity::Critical
        } else if score >= warning_threshold {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Normal => write!(f, "NORMAL"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Per-feature test outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureDriftResult {
    /// Test that produced this outcome
    pub test: TestKind,
    /// Drift score in [0, 1]
    pub drift_score: f64,
    /// Raw test statistic
    pub statistic: f64,
    /// P-value of the test
    pub p_value: f64,
    /// Whether `p_value < 0.05`
    pub significant: bool,
    /// Numeric only: current mean minus baseline mean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_shift: Option<f64>,
    /// Numeric only: current std minus baseline std
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_shift: Option<f64>,
    /// Categorical only: size of the union of categories in either sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<usize>,
}

impl FeatureDriftResult {
    /// Degenerate no-signal outcome for a feature that could not be tested
    pub fn untested() -> Self {
        Self {
            test: TestKind::None,
            drift_score: 0.0,
            statistic: 0.0,
            p_value: 1.0,
            significant: false,
            mean_shift: None,
            std_shift: None,
            categories: None,
        }
    }
}

/// Output of one `detect_drift` invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftResult {
    /// When the check ran
    pub timestamp: DateTime<Utc>,
    /// Size of the current batch that was evaluated
    pub n_samples: usize,
    /// Per-feature outcomes, keyed by feature name
    pub features: BTreeMap<String, FeatureDriftResult>,
    /// Unweighted mean of the drift scores of actually-tested features
    pub overall_score: f64,
    /// Severity derived from `overall_score`
    pub severity: Severity,
    /// True iff severity is Warning or Critical
    pub drift_detected: bool,
}

impl DriftResult {
    /// Number of features that actually ran a test
    pub fn tested_features(&self) -> usize {
        self.features
            .values()
            .filter(|f| f.test != TestKind::None)
            .count()
    }

    /// Names of features with a statistically significant result
    pub fn significant_features(&self) -> Vec<&str> {
        self.features
            .iter()
            .filter(|(_, f)| f.significant)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
