//! Tag derivation from section content.
//!
//! # Invariants
//! - Returned tags are lowercase and unique; hashtags come first, then
//!   vocabulary keywords, each in first-seen order.
//! - Matching is substring based: `unimportant` tags `important`.

use once_cell::sync::Lazy;
use regex::Regex;

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[A-Za-z][A-Za-z0-9_-]*").expect("valid hashtag regex"));

/// Extracts hashtag and keyword tags from trimmed content.
///
/// Keywords are compared lowercased; blank keywords never match.
pub fn extract_tags(content: &str, keywords: &[String]) -> Vec<String> {
    let mut tags = Vec::<String>::new();

    for hashtag in HASHTAG_RE.find_iter(content) {
        push_unique(&mut tags, hashtag.as_str()[1..].to_lowercase());
    }

    let lowered = content.to_lowercase();
    for keyword in keywords {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && lowered.contains(keyword.as_str()) {
            push_unique(&mut tags, keyword);
        }
    }

    tags
}

fn push_unique(tags: &mut Vec<String>, tag: String) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}
