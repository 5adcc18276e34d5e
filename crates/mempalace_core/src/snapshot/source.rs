//! Markdown document collection from a memory directory.
//!
//! # Responsibility
//! - Read the long-term file and daily logs named by a `SourceLayout`.
//! - Assign each document its root-relative identifier.
//!
//! # Invariants
//! - Documents are returned long-term file first, then daily logs sorted by
//!   file name.
//! - Missing files/directories are skipped; read failures are errors.

use super::{SnapshotError, SnapshotResult};
use crate::config::{SourceLayout, MARKDOWN_EXTENSION};
use log::{debug, info, warn};
use std::path::Path;

/// One markdown document and its root-relative identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Path relative to the memory root, `/`-separated (e.g. `memory/2026-02-08.md`).
    pub identifier: String,
    /// Raw UTF-8 document text.
    pub text: String,
}

impl SourceDocument {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }
}

/// Reads all memory documents under `memory_dir`.
///
/// # Errors
/// - `SnapshotError::Io` when an existing file or directory cannot be read.
pub fn collect_documents(
    memory_dir: impl AsRef<Path>,
    layout: &SourceLayout,
) -> SnapshotResult<Vec<SourceDocument>> {
    let memory_dir = memory_dir.as_ref();
    let mut documents = Vec::new();

    let long_term_path = memory_dir.join(&layout.long_term_file);
    if long_term_path.is_file() {
        let text = read_document(&long_term_path)?;
        debug!(
            "event=source_read module=snapshot status=ok identifier={} bytes={}",
            layout.long_term_file,
            text.len()
        );
        documents.push(SourceDocument::new(layout.long_term_file.clone(), text));
    } else {
        info!(
            "event=source_read module=snapshot status=skipped reason=missing identifier={}",
            layout.long_term_file
        );
    }

    let daily_dir = memory_dir.join(&layout.daily_dir);
    if daily_dir.is_dir() {
        for file_name in daily_file_names(&daily_dir)? {
            let path = daily_dir.join(&file_name);
            let text = read_document(&path)?;
            let identifier = format!("{}/{}", layout.daily_dir, file_name);
            debug!(
                "event=source_read module=snapshot status=ok identifier={} bytes={}",
                identifier,
                text.len()
            );
            documents.push(SourceDocument::new(identifier, text));
        }
    } else {
        info!(
            "event=source_read module=snapshot status=skipped reason=missing identifier={}",
            layout.daily_dir
        );
    }

    info!(
        "event=source_collect module=snapshot status=ok documents={}",
        documents.len()
    );
    Ok(documents)
}

/// Lists markdown file names in `dir`, sorted for deterministic builds.
fn daily_file_names(dir: &Path) -> SnapshotResult<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|err| SnapshotError::io(dir, err))?;
    let mut names = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|err| SnapshotError::io(dir, err))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(MARKDOWN_EXTENSION) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!(
                "event=source_read module=snapshot status=skipped reason=non_utf8_name name={:?}",
                raw
            ),
        }
    }

    names.sort();
    Ok(names)
}

fn read_document(path: &Path) -> SnapshotResult<String> {
    std::fs::read_to_string(path).map_err(|err| SnapshotError::io(path, err))
}
