//! Plain-text rendering of drift results for dashboards and logs.

use std::fmt::Write as FmtWrite;

use crate::drift::{DriftResult, TestKind};

const RULE: &str = "============================================================";
const FEATURE_RULE: &str = "------------------------------------------------------------";

/// Render a human-readable drift report: overall verdict first, then a
/// per-feature breakdown with score, test, p-value and significance.
pub fn render(result: &DriftResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "DATA DRIFT REPORT");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Timestamp: {}", result.timestamp.to_rfc3339());
    let _ = writeln!(out, "Samples: {}", result.n_samples);
    let _ = writeln!(
        out,
        "Overall drift score: {:.2}%",
        result.overall_score * 100.0
    );
    let _ = writeln!(out, "Severity: {}", result.severity);
    let _ = writeln!(
        out,
        "Drift detected: {}",
        if result.drift_detected { "YES" } else { "NO" }
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "FEATURES:");
    let _ = writeln!(out, "{FEATURE_RULE}");

    for (name, feature) in &result.features {
        let _ = writeln!(out);
        let _ = writeln!(out, "{name}:");
        let _ = writeln!(out, "  Drift score: {:.2}%", feature.drift_score * 100.0);
        let _ = writeln!(out, "  Test: {}", feature.test.name());
        if feature.test == TestKind::None {
            let _ = writeln!(out, "  Untested: no usable sample");
            continue;
        }
        let _ = writeln!(out, "  P-value: {:.4}", feature.p_value);
        let _ = writeln!(
            out,
            "  Significant: {}",
            if feature.significant { "YES" } else { "NO" }
        );
        if let (Some(mean_shift), Some(std_shift)) = (feature.mean_shift, feature.std_shift) {
            let _ = writeln!(out, "  Mean shift: {mean_shift:.4}");
            let _ = writeln!(out, "  Std shift: {std_shift:.4}");
        }
        if let Some(categories) = feature.categories {
            let _ = writeln!(out, "  Categories: {categories}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");

    out
}
