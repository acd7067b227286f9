//! Drift detector implementation.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::Utc;

use super::statistical::{chi_square_p_value, ks_p_value, ks_statistic, mean, population_std};
use super::types::{DriftResult, FeatureDriftResult, Severity, TestKind};
use crate::baseline::{load_snapshot, save_snapshot, BaselineSnapshot};
use crate::dataset::{Dataset, FeatureKind, FeatureValue};
use crate::error::{DriftError, Result};

/// Default overall-score threshold for Warning severity
pub const DEFAULT_WARNING_THRESHOLD: f64 = 0.15;

/// Default overall-score threshold for Critical severity
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 0.25;

/// Per-feature significance level for the underlying tests
const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Batch drift detector.
///
/// Owns an in-memory baseline snapshot and a pair of severity thresholds.
/// `detect_drift` is a pure synchronous computation over the loaded
/// baseline; the only I/O happens in `save_baseline`/`load_baseline`.
/// One instance per monitored model version; no global state.
#[derive(Debug)]
pub struct DriftDetector {
    warning_threshold: f64,
    critical_threshold: f64,
    baseline: Option<BaselineSnapshot>,
}

impl Default for DriftDetector {
    fn default() -> Self {
        Self {
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
            baseline: None,
        }
    }
}

impl DriftDetector {
    /// Create a detector with explicit thresholds.
    ///
    /// Fails fast with `InvalidThresholds` unless
    /// `0 <= warning < critical <= 1`; an inverted pair would silently
    /// invert the severity ordering.
    pub fn new(warning_threshold: f64, critical_threshold: f64) -> Result<Self> {
        let in_range = |t: f64| (0.0..=1.0).contains(&t);
        if !in_range(warning_threshold)
            || !in_range(critical_threshold)
            || warning_threshold >= critical_threshold
        {
            return Err(DriftError::InvalidThresholds {
                warning: warning_threshold,
                critical: critical_threshold,
            });
        }
        Ok(Self {
            warning_threshold,
            critical_threshold,
            baseline: None,
        })
    }

    /// Create a detector and eagerly load a persisted baseline if the
    /// file exists
    pub fn with_baseline(
        path: impl AsRef<Path>,
        warning_threshold: f64,
        critical_threshold: f64,
    ) -> Result<Self> {
        let mut detector = Self::new(warning_threshold, critical_threshold)?;
        if path.as_ref().exists() {
            detector.load_baseline(path)?;
        }
        Ok(detector)
    }

    pub fn warning_threshold(&self) -> f64 {
        self.warning_threshold
    }

    pub fn critical_threshold(&self) -> f64 {
        self.critical_threshold
    }

    /// The currently loaded baseline, if any
    pub fn baseline(&self) -> Option<&BaselineSnapshot> {
        self.baseline.as_ref()
    }

    /// Inject an already-captured snapshot as the current baseline
    /// without touching the filesystem
    pub fn set_baseline(&mut self, snapshot: BaselineSnapshot) {
        self.baseline = Some(snapshot);
    }

    /// Capture a baseline from a reference dataset, persist it to `path`
    /// (unconditionally overwriting any previous file) and retain it as
    /// the current in-memory baseline.
    pub fn save_baseline(
        &mut self,
        dataset: &Dataset,
        path: impl AsRef<Path>,
    ) -> Result<&BaselineSnapshot> {
        let snapshot = BaselineSnapshot::capture(dataset);
        save_snapshot(&snapshot, path)?;
        Ok(&*self.baseline.insert(snapshot))
    }

    /// Load a persisted snapshot and set it as the current baseline
    pub fn load_baseline(&mut self, path: impl AsRef<Path>) -> Result<&BaselineSnapshot> {
        let snapshot = load_snapshot(path)?;
        Ok(&*self.baseline.insert(snapshot))
    }

    /// Compare a current batch against the loaded baseline.
    ///
    /// `features` restricts the check to an explicit subset; `None` tests
    /// every feature in the baseline. Features absent from `current` are
    /// skipped entirely: they appear neither in the per-feature map nor
    /// in the overall-score denominator. Features that cannot be tested
    /// (no baseline sample, empty or uncoercible values) degrade to an
    /// untested outcome instead of failing the whole call.
    pub fn detect_drift(
        &self,
        current: &Dataset,
        features: Option<&[&str]>,
    ) -> Result<DriftResult> {
        let baseline = self.baseline.as_ref().ok_or(DriftError::NoBaseline)?;

        let requested: Vec<&str> = match features {
            Some(names) => names.to_vec(),
            None => baseline.stats.keys().map(String::as_str).collect(),
        };

        let mut per_feature = BTreeMap::new();
        let mut tested_scores = Vec::new();
        let mut n_samples = 0usize;

        for name in requested {
            let Some(values) = current.get(name) else {
                continue;
            };
            n_samples = n_samples.max(values.len());

            let outcome = test_feature(baseline, name, values);
            if outcome.test != TestKind::None {
                tested_scores.push(outcome.drift_score);
            }
            per_feature.insert(name.to_string(), outcome);
        }

        // Mean over an empty set is 0.0 by convention, not NaN
        let overall_score = if tested_scores.is_empty() {
            0.0
        } else {
            tested_scores.iter().sum::<f64>() / tested_scores.len() as f64
        };

        let severity =
            Severity::from_score(overall_score, self.warning_threshold, self.critical_threshold);

        Ok(DriftResult {
            timestamp: Utc::now(),
            n_samples,
            features: per_feature,
            overall_score,
            severity,
            drift_detected: severity != Severity::Normal,
        })
    }
}

/// Dispatch one feature to the test matching its baseline-time kind
fn test_feature(
    baseline: &BaselineSnapshot,
    name: &str,
    values: &[FeatureValue],
) -> FeatureDriftResult {
    let Some(sample) = baseline.sample(name) else {
        return FeatureDriftResult::untested();
    };
    if sample.is_empty() || values.is_empty() {
        return FeatureDriftResult::untested();
    }
    match baseline.feature_kind(name) {
        Some(FeatureKind::Numeric) => numeric_test(sample, values),
        Some(FeatureKind::Categorical) => categorical_test(sample, values),
        None => FeatureDriftResult::untested(),
    }
}

/// Two-sample KS test; the statistic is the drift score directly
fn numeric_test(baseline: &[FeatureValue], current: &[FeatureValue]) -> FeatureDriftResult {
    let base: Vec<f64> = baseline.iter().filter_map(FeatureValue::as_number).collect();
    let curr: Vec<f64> = current.iter().filter_map(FeatureValue::as_number).collect();
    if base.is_empty() || curr.is_empty() {
        return FeatureDriftResult::untested();
    }

    let statistic = ks_statistic(&base, &curr);
    let n1 = base.len() as f64;
    let n2 = curr.len() as f64;
    let n_eff = (n1 * n2) / (n1 + n2);
    let p_value = ks_p_value(statistic * n_eff.sqrt());

    FeatureDriftResult {
        test: TestKind::KolmogorovSmirnov,
        drift_score: statistic,
        statistic,
        p_value,
        significant: p_value < SIGNIFICANCE_LEVEL,
        mean_shift: Some(mean(&curr) - mean(&base)),
        std_shift: Some(population_std(&curr) - population_std(&base)),
        categories: None,
    }
}

/// Chi-square test on frequency tables over the union of categories.
///
/// Expected counts are baseline proportions scaled to the current total.
/// The drift score is the statistic normalized by the combined
/// observation count and clamped to [0, 1]; enormous divergence reports
/// as "fully drifted" rather than being distinguished further.
fn categorical_test(baseline: &[FeatureValue], current: &[FeatureValue]) -> FeatureDriftResult {
    let base_counts = label_counts(baseline);
    let curr_counts = label_counts(current);

    let categories: BTreeSet<&str> = base_counts
        .keys()
        .chain(curr_counts.keys())
        .map(String::as_str)
        .collect();

    let total_base: f64 = base_counts.values().sum::<u64>() as f64;
    let total_curr: f64 = curr_counts.values().sum::<u64>() as f64;

    let mut chi_sq = 0.0;
    let mut cells = 0usize;
    for cat in &categories {
        let observed = curr_counts.get(*cat).copied().unwrap_or(0) as f64;
        let base_pct = base_counts.get(*cat).copied().unwrap_or(0) as f64 / total_base;
        let expected = base_pct * total_curr;
        // Categories unseen in the baseline have expected 0; skip the
        // cell rather than dividing by zero. The clamp below absorbs the
        // lost signal.
        if expected > 0.0 {
            chi_sq += (observed - expected).powi(2) / expected;
            cells += 1;
        }
    }

    let df = cells.saturating_sub(1);
    let p_value = chi_square_p_value(chi_sq, df);
    let drift_score = (chi_sq / (total_base + total_curr)).clamp(0.0, 1.0);

    FeatureDriftResult {
        test: TestKind::ChiSquare,
        drift_score,
        statistic: chi_sq,
        p_value,
        significant: p_value < SIGNIFICANCE_LEVEL,
        mean_shift: None,
        std_shift: None,
        categories: Some(categories.len()),
    }
}

fn label_counts(values: &[FeatureValue]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value.as_label()).or_insert(0) += 1;
    }
    counts
}
