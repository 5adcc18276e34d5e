//! Pairwise similarity scoring.

use crate::config::LinkWeights;
use crate::model::memory::{Link, MemoryNode, MAX_LINK_STRENGTH};
use std::collections::HashSet;

/// Computes weighted links between every pair of nodes.
///
/// Pairs are visited as `(nodes[i], nodes[j])` with `i < j`, so each link's
/// `source` precedes its `target` and no pair appears twice. Strength is the
/// raw score clamped to `1.0`; pairs scoring below `weights.link_threshold`
/// produce no link.
pub fn link_memories(nodes: &[MemoryNode], weights: &LinkWeights) -> Vec<Link> {
    let mut links = Vec::new();

    for (index, node_a) in nodes.iter().enumerate() {
        for node_b in &nodes[index + 1..] {
            let raw = score_pair(node_a, node_b, weights);
            if raw >= weights.link_threshold {
                links.push(Link {
                    source: node_a.id.clone(),
                    target: node_b.id.clone(),
                    strength: raw.min(MAX_LINK_STRENGTH),
                });
            }
        }
    }

    links
}

/// Returns the unclamped similarity score of one node pair.
pub fn score_pair(a: &MemoryNode, b: &MemoryNode, weights: &LinkWeights) -> f64 {
    let mut score = 0.0;

    let shared_tags = a.tags.iter().filter(|tag| b.tags.contains(tag)).count();
    score += shared_tags as f64 * weights.shared_tag;

    if let (Some(date_a), Some(date_b)) = (a.date.as_deref(), b.date.as_deref()) {
        if date_a == date_b {
            score += weights.same_date;
        }
    }

    let shared_words = shared_title_words(&a.title, &b.title, weights.min_title_word_chars);
    score += shared_words as f64 * weights.shared_title_word;

    score
}

/// Counts significant words of `title_a` that also occur in `title_b`.
///
/// Words are whitespace-separated and lowercased; a word is significant when
/// it has more than `min_chars` characters. Every occurrence in `title_a`
/// counts, so repeated words are counted repeatedly.
pub fn shared_title_words(title_a: &str, title_b: &str, min_chars: usize) -> usize {
    let lowered_b = title_b.to_lowercase();
    let words_b = lowered_b.split_whitespace().collect::<HashSet<_>>();

    title_a
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > min_chars && words_b.contains(word))
        .count()
}

#[cfg(test)]
mod tests {
    use super::shared_title_words;

    #[test]
    fn short_words_do_not_count() {
        assert_eq!(shared_title_words("The big plan", "the big plan", 3), 1);
    }

    #[test]
    fn matching_is_case_insensitive_token_containment() {
        assert_eq!(shared_title_words("Garden Project", "project: garden", 3), 1);
        assert_eq!(shared_title_words("Garden Project", "PROJECT garden", 3), 2);
    }

    #[test]
    fn repeated_words_in_first_title_count_each_time() {
        assert_eq!(shared_title_words("rust rust rust", "rust", 3), 3);
        assert_eq!(shared_title_words("rust", "rust rust rust", 3), 1);
    }

    #[test]
    fn length_is_measured_in_characters() {
        assert_eq!(shared_title_words("café", "café", 3), 1);
    }
}
