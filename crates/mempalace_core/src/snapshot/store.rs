//! JSON snapshot persistence.
//!
//! # Responsibility
//! - Write the snapshot file the graph view fetches.
//! - Read it back with invariant checks, or fall back to an empty snapshot.
//!
//! # Invariants
//! - Writes go to a sibling temp file and are renamed into place, so readers
//!   never observe a partially written snapshot.
//! - Loaded snapshots are validated before they are returned.

use super::{SnapshotError, SnapshotResult};
use crate::model::snapshot::MemorySnapshot;
use chrono::Utc;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

const TEMP_SUFFIX: &str = "tmp";

/// Writes `snapshot` as pretty-printed JSON to `path`.
///
/// Parent directories are created when missing.
///
/// # Errors
/// - `SnapshotError::Io` on directory creation, write or rename failure.
/// - `SnapshotError::Json` when encoding fails.
pub fn write_snapshot(snapshot: &MemorySnapshot, path: impl AsRef<Path>) -> SnapshotResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    match write_atomically(snapshot, path) {
        Ok(bytes) => {
            info!(
                "event=snapshot_write module=snapshot status=ok nodes={} links={} bytes={} duration_ms={}",
                snapshot.nodes.len(),
                snapshot.links.len(),
                bytes,
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=snapshot_write module=snapshot status=error path={} error={}",
                path.display(),
                err
            );
            Err(err)
        }
    }
}

fn write_atomically(snapshot: &MemorySnapshot, path: &Path) -> SnapshotResult<usize> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| SnapshotError::io(parent, err))?;
    }

    let encoded = serde_json::to_string_pretty(snapshot)?;
    let temp_path = temp_path_for(path);
    std::fs::write(&temp_path, encoded.as_bytes())
        .map_err(|err| SnapshotError::io(&temp_path, err))?;
    if let Err(err) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(SnapshotError::io(path, err));
    }

    Ok(encoded.len())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Reads and validates a snapshot file.
///
/// # Errors
/// - `SnapshotError::Io` when the file cannot be read.
/// - `SnapshotError::Json` when the content is not a snapshot document.
/// - `SnapshotError::Validation` when graph invariants are violated.
pub fn load_snapshot(path: impl AsRef<Path>) -> SnapshotResult<MemorySnapshot> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|err| SnapshotError::io(path, err))?;
    let snapshot: MemorySnapshot = serde_json::from_str(&raw)?;
    snapshot.validate()?;
    info!(
        "event=snapshot_load module=snapshot status=ok nodes={} links={}",
        snapshot.nodes.len(),
        snapshot.links.len()
    );
    Ok(snapshot)
}

/// Loads a snapshot, falling back to an empty one stamped now.
///
/// Used by read-only consumers that must render something even when the
/// snapshot was never built or is unreadable.
pub fn load_snapshot_or_empty(path: impl AsRef<Path>) -> MemorySnapshot {
    let path = path.as_ref();
    match load_snapshot(path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(
                "event=snapshot_load module=snapshot status=fallback path={} error={}",
                path.display(),
                err
            );
            MemorySnapshot::empty(Utc::now())
        }
    }
}
