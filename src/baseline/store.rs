//! JSON file persistence for baseline snapshots.

use std::fs;
use std::path::Path;

use super::snapshot::BaselineSnapshot;
use crate::error::{DriftError, Result};

/// Persist a snapshot as pretty-printed JSON, overwriting any previous
/// file at that path. Parent directories are created as needed.
pub fn save_snapshot(snapshot: &BaselineSnapshot, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| DriftError::Serialization(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a previously saved snapshot.
///
/// Fails with `BaselineNotFound` when the path does not exist and with
/// `BaselineCorrupt` when the document cannot be parsed or violates the
/// stats/distribution key-set invariant. Never partially loads.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<BaselineSnapshot> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DriftError::BaselineNotFound(path.to_path_buf()));
    }
    let json = fs::read_to_string(path)?;
    let snapshot: BaselineSnapshot =
        serde_json::from_str(&json).map_err(|e| DriftError::BaselineCorrupt(e.to_string()))?;
    snapshot.validate().map_err(DriftError::BaselineCorrupt)?;
    Ok(snapshot)
}
