//! Markdown extraction entry points.
//!
//! # Responsibility
//! - Turn one markdown document into ordered memory nodes.
//! - Keep id, date and tag derivation rules in one place.
//!
//! # Invariants
//! - Extraction is a pure function of (text, source identifier, config).

pub mod ident;
pub mod parser;
pub mod tags;

pub use ident::generate_node_id;
pub use parser::extract_memories;
pub use tags::extract_tags;
