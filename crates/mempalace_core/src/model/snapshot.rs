//! Snapshot envelope consumed by the graph view.
//!
//! # Responsibility
//! - Wrap one built graph with its build timestamp and origin.
//! - Keep the persisted field names aligned with the display layer
//!   (`nodes`, `links`, `lastUpdated`, `source`).
//!
//! # Invariants
//! - A snapshot is a full-replace artifact; it is never patched.
//! - `last_updated` is UTC with millisecond precision and a `Z` suffix.

use crate::model::memory::{
    validate_graph, GraphValidationError, Link, MemoryGraph, MemoryNode,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Full graph snapshot produced by one build run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySnapshot {
    pub nodes: Vec<MemoryNode>,
    pub links: Vec<Link>,
    /// Build timestamp, e.g. `2026-02-08T09:30:00.000Z`.
    pub last_updated: String,
    /// Memory directory the snapshot was built from.
    #[serde(default)]
    pub source: String,
}

impl MemorySnapshot {
    /// Wraps a built graph, stamping it with `generated_at`.
    pub fn new(graph: MemoryGraph, source: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            nodes: graph.nodes,
            links: graph.links,
            last_updated: format_timestamp(generated_at),
            source: source.into(),
        }
    }

    /// Returns an empty snapshot stamped with `generated_at`.
    pub fn empty(generated_at: DateTime<Utc>) -> Self {
        Self::new(MemoryGraph::default(), String::new(), generated_at)
    }

    /// Returns a graph view over a copy of the snapshot data.
    pub fn to_graph(&self) -> MemoryGraph {
        MemoryGraph::new(self.nodes.clone(), self.links.clone())
    }

    /// Validates node/link invariants of the wrapped graph.
    pub fn validate(&self) -> Result<(), GraphValidationError> {
        validate_graph(&self.nodes, &self.links)
    }
}

/// Formats a timestamp the way the display layer expects.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
