//! Dataset input contract for drift detection.
//!
//! The detector boundary accepts exactly one shape: a mapping from feature
//! name to an ordered sequence of scalar values. Format normalization
//! (CSV files, dataframes, prediction logs) belongs to the data-loading
//! caller, not to the detector.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DriftError, Result};

/// A single observed scalar: either a number or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Label(String),
}

impl FeatureValue {
    /// Numeric coercion: numbers pass through, labels parse if they can.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(n) => Some(*n),
            FeatureValue::Label(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Category label: labels pass through, numbers are formatted.
    pub fn as_label(&self) -> String {
        match self {
            FeatureValue::Number(n) => n.to_string(),
            FeatureValue::Label(s) => s.clone(),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(n: f64) -> Self {
        FeatureValue::Number(n)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Label(s.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        FeatureValue::Label(s)
    }
}

/// Feature classification, decided once at baseline-capture time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Numeric,
    Categorical,
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureKind::Numeric => write!(f, "numeric"),
            FeatureKind::Categorical => write!(f, "categorical"),
        }
    }
}

impl FeatureKind {
    /// Infer the kind of a value sequence.
    ///
    /// Every value coerces to a number -> Numeric, otherwise Categorical.
    /// An empty column has nothing to coerce and is treated as Categorical.
    pub fn infer(values: &[FeatureValue]) -> Self {
        if !values.is_empty() && values.iter().all(|v| v.as_number().is_some()) {
            FeatureKind::Numeric
        } else {
            FeatureKind::Categorical
        }
    }
}

/// A batch of observations, one value sequence per named feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    features: BTreeMap<String, Vec<FeatureValue>>,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a feature column
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<FeatureValue>) {
        self.features.insert(name.into(), values);
    }

    /// Add a numeric feature column
    pub fn insert_numeric(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) {
        self.insert(name, values.into_iter().map(FeatureValue::Number).collect());
    }

    /// Add a categorical feature column
    pub fn insert_labels<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) {
        self.insert(
            name,
            values
                .into_iter()
                .map(|s| FeatureValue::Label(s.into()))
                .collect(),
        );
    }

    /// Values for one feature, if present
    pub fn get(&self, name: &str) -> Option<&[FeatureValue]> {
        self.features.get(name).map(Vec::as_slice)
    }

    /// Iterate over (name, values) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<FeatureValue>)> {
        self.features.iter()
    }

    /// Feature names in name order
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    /// Number of feature columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Load a dataset from a JSON object mapping feature names to arrays
    /// of scalars, e.g. `{"text_length": [98, 110], "language": ["pt", "en"]}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| DriftError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_coerces_to_itself() {
        assert_eq!(FeatureValue::Number(3.5).as_number(), Some(3.5));
    }

    #[test]
    fn numeric_label_coerces() {
        assert_eq!(FeatureValue::from("42.5").as_number(), Some(42.5));
        assert_eq!(FeatureValue::from(" 7 ").as_number(), Some(7.0));
    }

    #[test]
    fn non_numeric_label_does_not_coerce() {
        assert_eq!(FeatureValue::from("pt").as_number(), None);
    }

    #[test]
    fn number_formats_as_label() {
        assert_eq!(FeatureValue::Number(2.0).as_label(), "2");
    }

    #[test]
    fn infer_numeric_from_numbers() {
        let values = vec![FeatureValue::Number(1.0), FeatureValue::Number(2.0)];
        assert_eq!(FeatureKind::infer(&values), FeatureKind::Numeric);
    }

    #[test]
    fn infer_numeric_from_numeric_strings() {
        let values = vec![FeatureValue::from("1.5"), FeatureValue::from("2")];
        assert_eq!(FeatureKind::infer(&values), FeatureKind::Numeric);
    }

    #[test]
    fn infer_categorical_on_any_label() {
        let values = vec![FeatureValue::Number(1.0), FeatureValue::from("en")];
        assert_eq!(FeatureKind::infer(&values), FeatureKind::Categorical);
    }

    #[test]
    fn infer_categorical_on_empty() {
        assert_eq!(FeatureKind::infer(&[]), FeatureKind::Categorical);
    }

    #[test]
    fn dataset_insert_and_get() {
        let mut ds = Dataset::new();
        ds.insert_numeric("confidence", [0.9, 0.8]);
        ds.insert_labels("language", ["pt", "en"]);

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get("confidence").map(<[_]>::len), Some(2));
        assert!(ds.get("missing").is_none());
    }

    #[test]
    fn dataset_json_round_trip() {
        let mut ds = Dataset::new();
        ds.insert_numeric("text_length", [98.0, 110.0]);
        ds.insert_labels("language", ["pt", "en"]);

        let json = serde_json::to_string(&ds).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(ds, back);
    }

    #[test]
    fn dataset_parses_mixed_json_scalars() {
        let json = r#"{"text_length": [98, 110.5], "language": ["pt", "en"]}"#;
        let ds: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(
            ds.get("text_length"),
            Some(&[FeatureValue::Number(98.0), FeatureValue::Number(110.5)][..])
        );
        assert_eq!(
            ds.get("language"),
            Some(&[FeatureValue::from("pt"), FeatureValue::from("en")][..])
        );
    }

    #[test]
    fn from_json_file_missing_is_io_error() {
        let err = Dataset::from_json_file("/nonexistent/data.json").unwrap_err();
        assert!(matches!(err, crate::error::DriftError::Io(_)));
    }
}
