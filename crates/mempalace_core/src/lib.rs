//! Core domain logic for Memory Palace.
//! Turns markdown journals into a linked memory graph snapshot.

pub mod config;
pub mod extract;
pub mod link;
pub mod logging;
pub mod model;
pub mod search;
pub mod snapshot;

pub use config::{ConfigError, GraphConfig, LinkWeights, SourceLayout};
pub use extract::{extract_memories, extract_tags, generate_node_id};
pub use link::{link_memories, score_pair};
pub use logging::{
    default_log_level, init_console_logging, init_logging, logging_status, LogTarget,
};
pub use model::memory::{GraphValidationError, Link, MemoryGraph, MemoryNode, NodeId};
pub use model::snapshot::MemorySnapshot;
pub use search::{filter_graph, GraphStats};
pub use snapshot::{
    build_graph, build_snapshot, collect_documents, load_snapshot, load_snapshot_or_empty,
    snapshot_from_documents, write_snapshot, SnapshotError, SnapshotResult, SourceDocument,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
