//! Snapshot build and persistence entry points.
//!
//! # Responsibility
//! - Collect markdown documents from a memory directory.
//! - Run extraction per document, then link the combined node set once.
//! - Persist and reload the full-replace JSON snapshot.
//!
//! # Invariants
//! - Linking only runs after every document has been extracted.
//! - Node ids are unique across the whole snapshot.
//! - Persisted snapshots are replaced atomically, never patched.

use crate::model::memory::GraphValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod build;
pub mod source;
pub mod store;

pub use build::{build_graph, build_snapshot, snapshot_from_documents};
pub use source::{collect_documents, SourceDocument};
pub use store::{load_snapshot, load_snapshot_or_empty, write_snapshot};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot build/persistence error.
#[derive(Debug)]
pub enum SnapshotError {
    /// File-system failure on a specific path.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Snapshot JSON could not be encoded or decoded.
    Json(serde_json::Error),
    /// Snapshot content violates graph invariants.
    Validation(GraphValidationError),
}

impl SnapshotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at `{}`: {source}", path.display()),
            Self::Json(err) => write!(f, "invalid snapshot json: {err}"),
            Self::Validation(err) => write!(f, "invalid snapshot graph: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<GraphValidationError> for SnapshotError {
    fn from(value: GraphValidationError) -> Self {
        Self::Validation(value)
    }
}
