//! In-memory graph search entry points.
//!
//! # Responsibility
//! - Narrow a built graph to nodes matching a search term.
//! - Summarize graph size for display and CLI output.

pub mod filter;

pub use filter::{filter_graph, GraphStats};
