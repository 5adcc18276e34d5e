//! Term-based node filtering over a memory graph.
//!
//! # Responsibility
//! - Keep nodes whose title, content or tags match a search term.
//! - Drop links whose endpoints did not both survive.
//!
//! # Invariants
//! - Filtering never reorders nodes or links.
//! - A blank term returns the graph unchanged.

use crate::model::memory::{MemoryGraph, MemoryNode};
use std::collections::{BTreeSet, HashSet};

/// Returns the subgraph of nodes matching `term`.
///
/// Matching rules:
/// - title or content contains the term, case-insensitively;
/// - or any tag contains the lowercased term.
pub fn filter_graph(graph: &MemoryGraph, term: &str) -> MemoryGraph {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return graph.clone();
    }

    let nodes = graph
        .nodes
        .iter()
        .filter(|node| node_matches(node, &needle))
        .cloned()
        .collect::<Vec<_>>();
    let visible = nodes
        .iter()
        .map(|node| node.id.as_str())
        .collect::<HashSet<_>>();
    let links = graph
        .links
        .iter()
        .filter(|link| {
            visible.contains(link.source.as_str()) && visible.contains(link.target.as_str())
        })
        .cloned()
        .collect();

    MemoryGraph::new(nodes, links)
}

fn node_matches(node: &MemoryNode, needle: &str) -> bool {
    node.title.to_lowercase().contains(needle)
        || node.content.to_lowercase().contains(needle)
        || node.tags.iter().any(|tag| tag.contains(needle))
}

/// Size summary of one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub node_count: usize,
    pub link_count: usize,
    /// Nodes carrying a date.
    pub dated_count: usize,
    /// Distinct tags, sorted by name.
    pub tags: Vec<String>,
}

impl GraphStats {
    /// Computes stats for `graph`.
    pub fn of(graph: &MemoryGraph) -> Self {
        let tags = graph
            .nodes
            .iter()
            .flat_map(|node| node.tags.iter().cloned())
            .collect::<BTreeSet<_>>();
        Self {
            node_count: graph.nodes.len(),
            link_count: graph.links.len(),
            dated_count: graph.nodes.iter().filter(|node| node.date.is_some()).count(),
            tags: tags.into_iter().collect(),
        }
    }
}
