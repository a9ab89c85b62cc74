//! JSON snapshot persistence for the inventory store.
//!
//! The snapshot file is a flat JSON object: item names as keys, integer
//! quantities as values. Access is a scoped read-or-write with no locking;
//! concurrent writers are not mitigated.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use stockledger_inventory::InventoryStore;

/// Failure while loading or saving a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write snapshot {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read and parse the JSON object at `path` into a fresh mapping.
///
/// Never touches a live store; the caller decides whether to adopt the
/// result. A missing file and malformed JSON (including non-integer
/// quantities) surface as [`SnapshotError::Read`] / [`SnapshotError::Parse`].
pub fn load(path: &Path) -> Result<BTreeMap<String, i64>, SnapshotError> {
    let data = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `store` to `path`, pretty-printed.
///
/// On failure the file's prior contents are unspecified.
pub fn save(store: &InventoryStore, path: &Path) -> Result<(), SnapshotError> {
    let mut data = serde_json::to_string_pretty(store).map_err(SnapshotError::Encode)?;
    data.push('\n');

    fs::write(path, data).map_err(|source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(entries: &[(&str, i64)]) -> InventoryStore {
        let mut items = BTreeMap::new();
        for (item, qty) in entries {
            items.insert(item.to_string(), *qty);
        }
        let mut store = InventoryStore::new();
        store.merge(items);
        store
    }

    #[test]
    fn save_then_load_round_trips_the_exact_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let store = seeded(&[("apple", 7), ("banana", -2), ("cherry", 0)]);

        save(&store, &path).unwrap();
        let loaded = load(&path).unwrap();

        let mut restored = InventoryStore::new();
        restored.merge(loaded);
        assert_eq!(restored, store);
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        match err {
            SnapshotError::Read { .. } => {}
            _ => panic!("Expected Read error for a missing file"),
        }
    }

    #[test]
    fn load_malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "not json at all").unwrap();

        let err = load(&path).unwrap_err();
        match err {
            SnapshotError::Parse { .. } => {}
            _ => panic!("Expected Parse error for malformed JSON"),
        }
    }

    #[test]
    fn load_rejects_non_integer_quantities() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"apple": "ten"}"#).unwrap();

        let err = load(&path).unwrap_err();
        match err {
            SnapshotError::Parse { .. } => {}
            _ => panic!("Expected Parse error for a non-integer quantity"),
        }
    }

    #[test]
    fn save_pretty_prints_the_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let store = seeded(&[("apple", 10)]);

        save(&store, &path).unwrap();
        let data = fs::read_to_string(&path).unwrap();

        assert!(data.contains("\"apple\": 10"));
        assert!(data.ends_with("}\n"));
    }
}
