//! Memory graph domain model.
//!
//! # Responsibility
//! - Define the node/link records shared by extraction, linking and display.
//! - Define the snapshot envelope persisted for the graph view.
//!
//! # Invariants
//! - Every node is identified by a stable, deterministic `NodeId`.
//! - Graph data is derived wholesale; records are never mutated in place.

pub mod memory;
pub mod snapshot;
