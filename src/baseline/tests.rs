//! Tests for baseline capture and persistence.

use super::*;
use crate::dataset::{Dataset, FeatureKind, FeatureValue};
use crate::error::DriftError;
use approx::assert_relative_eq;

fn reference_dataset() -> Dataset {
    let mut ds = Dataset::new();
    ds.insert_numeric("text_length", (1..=10).map(f64::from));
    ds.insert_labels("language", ["pt", "pt", "pt", "en", "en", "es"]);
    ds
}

#[test]
fn numeric_stats_from_known_values() {
    let snapshot = BaselineSnapshot::capture(&reference_dataset());
    let FeatureStats::Numeric {
        mean,
        std,
        min,
        max,
        median,
        q25,
        q75,
    } = snapshot.stats["text_length"].clone()
    else {
        panic!("expected numeric stats");
    };

    assert_relative_eq!(mean, 5.5);
    assert_relative_eq!(std, 3.0276503540974917, epsilon = 1e-12);
    assert_relative_eq!(min, 1.0);
    assert_relative_eq!(max, 10.0);
    assert_relative_eq!(median, 5.5);
    assert_relative_eq!(q25, 3.25);
    assert_relative_eq!(q75, 7.75);
}

#[test]
fn categorical_stats_count_labels() {
    let snapshot = BaselineSnapshot::capture(&reference_dataset());
    let FeatureStats::Categorical {
        n_unique,
        top_values,
    } = snapshot.stats["language"].clone()
    else {
        panic!("expected categorical stats");
    };

    assert_eq!(n_unique, 3);
    assert_eq!(top_values["pt"], 3);
    assert_eq!(top_values["en"], 2);
    assert_eq!(top_values["es"], 1);
}

#[test]
fn top_values_limited_to_most_frequent() {
    let mut ds = Dataset::new();
    // 15 distinct labels; label k appears k+1 times
    let labels: Vec<String> = (0..15usize)
        .flat_map(|k| std::iter::repeat_n(format!("cat{k}"), k + 1))
        .collect();
    ds.insert_labels("feature", labels);

    let snapshot = BaselineSnapshot::capture(&ds);
    let FeatureStats::Categorical {
        n_unique,
        top_values,
    } = snapshot.stats["feature"].clone()
    else {
        panic!("expected categorical stats");
    };

    assert_eq!(n_unique, 15);
    assert_eq!(top_values.len(), TOP_VALUE_LIMIT);
    // The five rarest labels fall outside the top list
    assert!(top_values.contains_key("cat14"));
    assert!(!top_values.contains_key("cat0"));
    assert!(!top_values.contains_key("cat4"));
}

#[test]
fn capture_keeps_stats_and_distribution_keys_in_sync() {
    let snapshot = BaselineSnapshot::capture(&reference_dataset());
    let stat_keys: Vec<&String> = snapshot.stats.keys().collect();
    let dist_keys: Vec<&String> = snapshot.distribution.keys().collect();
    assert_eq!(stat_keys, dist_keys);
    assert!(snapshot.validate().is_ok());
}

#[test]
fn capture_records_max_column_length() {
    let mut ds = Dataset::new();
    ds.insert_numeric("long", (0..50).map(f64::from));
    ds.insert_numeric("short", (0..10).map(f64::from));
    let snapshot = BaselineSnapshot::capture(&ds);
    assert_eq!(snapshot.n_samples, 50);
}

#[test]
fn oversized_feature_is_downsampled() {
    let mut ds = Dataset::new();
    ds.insert_numeric("big", (0..10_050).map(f64::from));
    let snapshot = BaselineSnapshot::capture(&ds);

    let sample = snapshot.sample("big").unwrap();
    assert_eq!(sample.len(), MAX_STORED_SAMPLES);
    // Stats still describe the full column
    assert_eq!(snapshot.n_samples, 10_050);
    let FeatureStats::Numeric { min, max, .. } = snapshot.stats["big"].clone() else {
        panic!("expected numeric stats");
    };
    assert_eq!(min, 0.0);
    assert_eq!(max, 10_049.0);
}

#[test]
fn small_feature_is_stored_verbatim() {
    let snapshot = BaselineSnapshot::capture(&reference_dataset());
    assert_eq!(
        snapshot.sample("text_length").map(<[_]>::len),
        Some(10)
    );
    assert_eq!(
        snapshot.sample("text_length").unwrap()[0],
        FeatureValue::Number(1.0)
    );
}

#[test]
fn feature_kind_reflects_capture_time_classification() {
    let snapshot = BaselineSnapshot::capture(&reference_dataset());
    assert_eq!(
        snapshot.feature_kind("text_length"),
        Some(FeatureKind::Numeric)
    );
    assert_eq!(
        snapshot.feature_kind("language"),
        Some(FeatureKind::Categorical)
    );
    assert_eq!(snapshot.feature_kind("missing"), None);
}

#[test]
fn save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline_distribution.json");

    let snapshot = BaselineSnapshot::capture(&reference_dataset());
    save_snapshot(&snapshot, &path).unwrap();
    let loaded = load_snapshot(&path).unwrap();

    assert_eq!(loaded.n_samples, snapshot.n_samples);
    assert_eq!(loaded.timestamp, snapshot.timestamp);
    assert_eq!(loaded.stats, snapshot.stats);
    assert_eq!(loaded.distribution, snapshot.distribution);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/dir/baseline.json");

    let snapshot = BaselineSnapshot::capture(&reference_dataset());
    save_snapshot(&snapshot, &path).unwrap();
    assert!(path.exists());
}

#[test]
fn save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");

    let first = BaselineSnapshot::capture(&reference_dataset());
    save_snapshot(&first, &path).unwrap();

    let mut other = Dataset::new();
    other.insert_numeric("confidence", [0.9, 0.8, 0.7]);
    let second = BaselineSnapshot::capture(&other);
    save_snapshot(&second, &path).unwrap();

    let loaded = load_snapshot(&path).unwrap();
    assert_eq!(loaded.stats.len(), 1);
    assert!(loaded.stats.contains_key("confidence"));
}

#[test]
fn load_missing_file_is_not_found() {
    let err = load_snapshot("/nonexistent/baseline.json").unwrap_err();
    assert!(matches!(err, DriftError::BaselineNotFound(_)));
}

#[test]
fn load_unparseable_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, DriftError::BaselineCorrupt(_)));
}

#[test]
fn load_rejects_key_set_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");
    // Stats for a feature with no stored sample
    let json = r#"{
        "timestamp": "2026-01-15T10:00:00Z",
        "n_samples": 3,
        "stats": {
            "text_length": {
                "type": "numeric",
                "mean": 2.0, "std": 1.0, "min": 1.0, "max": 3.0,
                "median": 2.0, "q25": 1.5, "q75": 2.5
            }
        },
        "distribution": {}
    }"#;
    std::fs::write(&path, json).unwrap();

    let err = load_snapshot(&path).unwrap_err();
    let DriftError::BaselineCorrupt(msg) = err else {
        panic!("expected corrupt error");
    };
    assert!(msg.contains("text_length"));
}

#[test]
fn snapshot_json_is_self_describing() {
    let snapshot = BaselineSnapshot::capture(&reference_dataset());
    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    assert!(json.contains("\"type\": \"numeric\""));
    assert!(json.contains("\"type\": \"categorical\""));
    assert!(json.contains("\"n_samples\""));
    assert!(json.contains("\"top_values\""));
}
