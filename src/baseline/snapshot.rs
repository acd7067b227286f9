//! Baseline snapshot: per-feature statistics plus a bounded raw sample.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, FeatureKind, FeatureValue};
use crate::drift::statistical::{mean, quantile, sample_std};

/// Cap on raw values stored per feature. Beyond this, a uniform random
/// sample without replacement is kept; KS/Chi-square on a 10k sample is
/// adequate for any production batch volume.
pub const MAX_STORED_SAMPLES: usize = 10_000;

/// Number of most-frequent categorical values recorded in the stats
pub const TOP_VALUE_LIMIT: usize = 10;

/// Descriptive statistics for one feature at snapshot time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeatureStats {
    Numeric {
        mean: f64,
        /// Sample standard deviation (ddof = 1)
        std: f64,
        min: f64,
        max: f64,
        median: f64,
        q25: f64,
        q75: f64,
    },
    Categorical {
        n_unique: usize,
        /// The `TOP_VALUE_LIMIT` most frequent values with their counts.
        /// Ties are broken by first-seen order when selecting entries.
        top_values: BTreeMap<String, u64>,
    },
}

impl FeatureStats {
    /// Which kind of feature these stats describe
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureStats::Numeric { .. } => FeatureKind::Numeric,
            FeatureStats::Categorical { .. } => FeatureKind::Categorical,
        }
    }

    /// Compute stats for a value sequence, classifying it first
    pub fn compute(values: &[FeatureValue]) -> Self {
        match FeatureKind::infer(values) {
            FeatureKind::Numeric => Self::numeric(values),
            FeatureKind::Categorical => Self::categorical(values),
        }
    }

    fn numeric(values: &[FeatureValue]) -> Self {
        let mut nums: Vec<f64> = values.iter().filter_map(FeatureValue::as_number).collect();
        nums.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        FeatureStats::Numeric {
            mean: mean(&nums),
            std: sample_std(&nums),
            min: nums.first().copied().unwrap_or(0.0),
            max: nums.last().copied().unwrap_or(0.0),
            median: quantile(&nums, 0.5),
            q25: quantile(&nums, 0.25),
            q75: quantile(&nums, 0.75),
        }
    }

    fn categorical(values: &[FeatureValue]) -> Self {
        // Count labels while remembering first-seen order for tie-breaks
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, u64> = HashMap::new();
        for value in values {
            let label = value.as_label();
            if !counts.contains_key(&label) {
                order.push(label.clone());
            }
            *counts.entry(label).or_insert(0) += 1;
        }

        let n_unique = order.len();
        // Stable sort keeps first-seen order among equal counts
        let mut ranked = order;
        ranked.sort_by(|a, b| counts[b.as_str()].cmp(&counts[a.as_str()]));
        ranked.truncate(TOP_VALUE_LIMIT);

        let top_values = ranked
            .into_iter()
            .map(|label| {
                let count = counts[label.as_str()];
                (label, count)
            })
            .collect();

        FeatureStats::Categorical {
            n_unique,
            top_values,
        }
    }
}

/// Persisted reference distribution: stats plus a bounded raw sample per
/// feature. Immutable once built; wholly replaced, never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineSnapshot {
    /// When the snapshot was captured
    pub timestamp: DateTime<Utc>,
    /// Number of records the snapshot was computed from
    pub n_samples: usize,
    /// Per-feature descriptive statistics
    pub stats: BTreeMap<String, FeatureStats>,
    /// Per-feature raw values, capped at `MAX_STORED_SAMPLES`
    pub distribution: BTreeMap<String, Vec<FeatureValue>>,
}

impl BaselineSnapshot {
    /// Capture a snapshot from a reference dataset
    pub fn capture(dataset: &Dataset) -> Self {
        let mut stats = BTreeMap::new();
        let mut distribution = BTreeMap::new();
        let mut n_samples = 0usize;

        for (name, values) in dataset.iter() {
            n_samples = n_samples.max(values.len());
            stats.insert(name.clone(), FeatureStats::compute(values));
            distribution.insert(name.clone(), cap_sample(values));
        }

        Self {
            timestamp: Utc::now(),
            n_samples,
            stats,
            distribution,
        }
    }

    /// Classification of a feature, as decided at capture time
    pub fn feature_kind(&self, name: &str) -> Option<FeatureKind> {
        self.stats.get(name).map(FeatureStats::kind)
    }

    /// Stored reference sample for a feature
    pub fn sample(&self, name: &str) -> Option<&[FeatureValue]> {
        self.distribution.get(name).map(Vec::as_slice)
    }

    /// Check the stats/distribution key-set invariant
    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        for name in self.stats.keys() {
            if !self.distribution.contains_key(name) {
                return Err(format!("feature '{name}' has stats but no stored sample"));
            }
        }
        for name in self.distribution.keys() {
            if !self.stats.contains_key(name) {
                return Err(format!("feature '{name}' has a stored sample but no stats"));
            }
        }
        Ok(())
    }
}

/// Keep at most `MAX_STORED_SAMPLES` values, uniformly sampled without
/// replacement when the feature has more
fn cap_sample(values: &[FeatureValue]) -> Vec<FeatureValue> {
    if values.len() <= MAX_STORED_SAMPLES {
        return values.to_vec();
    }
    let mut rng = rand::rng();
    let mut picked = rand::seq::index::sample(&mut rng, values.len(), MAX_STORED_SAMPLES).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| values[i].clone()).collect()
}
