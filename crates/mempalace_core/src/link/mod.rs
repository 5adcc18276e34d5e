//! Similarity linking over the full node set.
//!
//! # Responsibility
//! - Score every unordered node pair with the tag/date/title heuristic.
//! - Materialize links whose score meets the configured threshold.
//!
//! # Invariants
//! - Linking is exhaustive over all pairs; no pruning or sampling.
//! - Output order follows input order of `(source, target)` pairs.

pub mod scorer;

pub use scorer::{link_memories, score_pair, shared_title_words};
