//! Memory node and link records.
//!
//! # Responsibility
//! - Define the canonical `MemoryNode` and `Link` shapes exchanged with the
//!   graph view.
//! - Validate whole graphs read back from persisted snapshots.
//!
//! # Invariants
//! - Node ids are unique across one graph.
//! - Every link endpoint refers to an existing node, and `source` precedes
//!   `target` in node order.
//! - Link strength is finite and within `(0, 1]`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid iso date regex"));

/// Upper bound for link strength.
pub const MAX_LINK_STRENGTH: f64 = 1.0;

/// Deterministic node identifier derived from source and title.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NodeId = String;

/// One extracted, taggable, dated unit of journal content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryNode {
    /// Lowercase alphanumeric-with-hyphens id, at most 50 characters.
    pub id: NodeId,
    /// Heading text, or the document base name for heading-less documents.
    pub title: String,
    /// Section body trimmed of surrounding whitespace.
    pub content: String,
    /// `YYYY-MM-DD`, from the file name or the latest date heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Base file name of the originating document.
    pub source: String,
    /// Hashtags and vocabulary keywords, de-duplicated.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Layout-assigned position. Written only by the graph view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Layout-assigned position. Written only by the graph view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Undirected weighted edge between two memory nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
    /// Clamped similarity score in `(0, 1]`.
    pub strength: f64,
}

/// Node and link sets produced by one build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryGraph {
    pub nodes: Vec<MemoryNode>,
    pub links: Vec<Link>,
}

impl MemoryGraph {
    /// Creates a graph from already-linked parts.
    pub fn new(nodes: Vec<MemoryNode>, links: Vec<Link>) -> Self {
        Self { nodes, links }
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Validates graph-level invariants.
    ///
    /// # Errors
    /// - Returns the first violated invariant in node order, then link order.
    pub fn validate(&self) -> Result<(), GraphValidationError> {
        validate_graph(&self.nodes, &self.links)
    }
}

/// Validates node/link invariants for graph parts held by any envelope.
pub fn validate_graph(nodes: &[MemoryNode], links: &[Link]) -> Result<(), GraphValidationError> {
    let mut positions = HashMap::<&str, usize>::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        if node.id.trim().is_empty() {
            return Err(GraphValidationError::EmptyNodeId { index });
        }
        if node.title.is_empty() {
            return Err(GraphValidationError::EmptyTitle(node.id.clone()));
        }
        if let Some(date) = node.date.as_deref() {
            if !is_iso_date(date) {
                return Err(GraphValidationError::InvalidDate {
                    id: node.id.clone(),
                    date: date.to_string(),
                });
            }
        }
        if positions.insert(node.id.as_str(), index).is_some() {
            return Err(GraphValidationError::DuplicateNodeId(node.id.clone()));
        }
    }

    let mut seen_pairs = HashSet::<(&str, &str)>::with_capacity(links.len());
    for link in links {
        let source = positions
            .get(link.source.as_str())
            .ok_or_else(|| GraphValidationError::UnknownEndpoint(link.source.clone()))?;
        let target = positions
            .get(link.target.as_str())
            .ok_or_else(|| GraphValidationError::UnknownEndpoint(link.target.clone()))?;
        if source == target {
            return Err(GraphValidationError::SelfLoop(link.source.clone()));
        }
        if source > target {
            return Err(GraphValidationError::ReversedLink {
                source: link.source.clone(),
                target: link.target.clone(),
            });
        }
        if !seen_pairs.insert((link.source.as_str(), link.target.as_str())) {
            return Err(GraphValidationError::DuplicateLink {
                source: link.source.clone(),
                target: link.target.clone(),
            });
        }
        if !link.strength.is_finite()
            || link.strength <= 0.0
            || link.strength > MAX_LINK_STRENGTH
        {
            return Err(GraphValidationError::StrengthOutOfRange {
                source: link.source.clone(),
                target: link.target.clone(),
                strength: link.strength,
            });
        }
    }

    Ok(())
}

/// Returns whether `value` is exactly a `YYYY-MM-DD` date pattern.
///
/// Pattern check only; calendar validity is not enforced.
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE_RE.is_match(value)
}

/// Graph invariant violation.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphValidationError {
    EmptyNodeId { index: usize },
    EmptyTitle(NodeId),
    InvalidDate { id: NodeId, date: String },
    DuplicateNodeId(NodeId),
    UnknownEndpoint(NodeId),
    SelfLoop(NodeId),
    ReversedLink { source: NodeId, target: NodeId },
    DuplicateLink { source: NodeId, target: NodeId },
    StrengthOutOfRange {
        source: NodeId,
        target: NodeId,
        strength: f64,
    },
}

impl Display for GraphValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNodeId { index } => write!(f, "node at index {index} has an empty id"),
            Self::EmptyTitle(id) => write!(f, "node `{id}` has an empty title"),
            Self::InvalidDate { id, date } => {
                write!(f, "node `{id}` has date `{date}`; expected YYYY-MM-DD")
            }
            Self::DuplicateNodeId(id) => write!(f, "duplicate node id `{id}`"),
            Self::UnknownEndpoint(id) => write!(f, "link references unknown node `{id}`"),
            Self::SelfLoop(id) => write!(f, "link from `{id}` to itself"),
            Self::ReversedLink { source, target } => write!(
                f,
                "link `{source}` -> `{target}` does not follow node order"
            ),
            Self::DuplicateLink { source, target } => {
                write!(f, "duplicate link `{source}` -> `{target}`")
            }
            Self::StrengthOutOfRange {
                source,
                target,
                strength,
            } => write!(
                f,
                "link `{source}` -> `{target}` has strength {strength}; expected (0, 1]"
            ),
        }
    }
}

impl Error for GraphValidationError {}
