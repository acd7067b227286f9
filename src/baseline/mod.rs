//! Baseline snapshot capture and persistence.
//!
//! A baseline is the stored reference distribution that new batches are
//! compared against: per-feature descriptive statistics plus a bounded
//! raw sample, serialized as a single self-describing JSON document.

mod snapshot;
mod store;

#[cfg(test)]
mod tests;

pub use snapshot::{BaselineSnapshot, FeatureStats, MAX_STORED_SAMPLES, TOP_VALUE_LIMIT};
pub use store::{load_snapshot, save_snapshot};
