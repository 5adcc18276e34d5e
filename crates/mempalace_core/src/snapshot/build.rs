//! Graph assembly across documents.

use super::source::{collect_documents, SourceDocument};
use super::SnapshotResult;
use crate::config::{GraphConfig, SourceLayout};
use crate::extract::ident::MAX_NODE_ID_CHARS;
use crate::extract::parser::extract_memories;
use crate::link::scorer::link_memories;
use crate::model::memory::{MemoryGraph, MemoryNode};
use crate::model::snapshot::MemorySnapshot;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

const EMPTY_ID_BASE: &str = "node";

/// Extracts every document in order, then links the combined node set.
///
/// Colliding ids (same source and title, or ids equal after truncation) are
/// disambiguated in node order: the first node keeps its id and later ones
/// get `-2`, `-3`, ... suffixes within the id length limit.
pub fn build_graph(documents: &[SourceDocument], config: &GraphConfig) -> MemoryGraph {
    let mut nodes = documents
        .iter()
        .flat_map(|doc| extract_memories(&doc.text, &doc.identifier, config))
        .collect::<Vec<_>>();
    assign_unique_ids(&mut nodes);

    let links = link_memories(&nodes, &config.weights);
    MemoryGraph::new(nodes, links)
}

/// Builds a full snapshot from the documents under `memory_dir`.
///
/// # Side effects
/// - Reads the memory directory.
/// - Emits `snapshot_build` logging events with counts and duration.
pub fn build_snapshot(
    memory_dir: impl AsRef<Path>,
    config: &GraphConfig,
    layout: &SourceLayout,
    generated_at: DateTime<Utc>,
) -> SnapshotResult<MemorySnapshot> {
    let memory_dir = memory_dir.as_ref();
    let documents = collect_documents(memory_dir, layout)?;
    Ok(snapshot_from_documents(
        &documents,
        memory_dir.display().to_string(),
        config,
        generated_at,
    ))
}

/// Builds a snapshot from documents the caller already collected.
///
/// `source` is recorded as the snapshot's origin label.
pub fn snapshot_from_documents(
    documents: &[SourceDocument],
    source: String,
    config: &GraphConfig,
    generated_at: DateTime<Utc>,
) -> MemorySnapshot {
    let started_at = Instant::now();
    info!("event=snapshot_build module=snapshot status=start");

    let graph = build_graph(documents, config);

    info!(
        "event=snapshot_build module=snapshot status=ok documents={} nodes={} links={} duration_ms={}",
        documents.len(),
        graph.nodes.len(),
        graph.links.len(),
        started_at.elapsed().as_millis()
    );

    MemorySnapshot::new(graph, source, generated_at)
}

fn assign_unique_ids(nodes: &mut [MemoryNode]) {
    let mut taken = HashSet::<String>::with_capacity(nodes.len());

    for node in nodes.iter_mut() {
        if node.id.is_empty() {
            node.id = EMPTY_ID_BASE.to_string();
        }
        if taken.insert(node.id.clone()) {
            continue;
        }

        let base = node.id.clone();
        let mut ordinal = 2_usize;
        let unique = loop {
            let candidate = suffixed_id(&base, ordinal);
            if taken.insert(candidate.clone()) {
                break candidate;
            }
            ordinal += 1;
        };
        warn!(
            "event=node_id_collision module=snapshot status=renamed id={} renamed_to={}",
            base, unique
        );
        node.id = unique;
    }
}

fn suffixed_id(base: &str, ordinal: usize) -> String {
    let suffix = format!("-{ordinal}");
    let keep = MAX_NODE_ID_CHARS
        .saturating_sub(suffix.len())
        .min(base.len());
    // Ids are ASCII, so any byte offset is a char boundary.
    let stem = base[..keep].trim_end_matches('-');
    format!("{stem}{suffix}")
}
