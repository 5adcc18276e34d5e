//! Source-identifier helpers: node ids, file names and filename dates.

use crate::model::memory::NodeId;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum node id length in characters.
pub const MAX_NODE_ID_CHARS: usize = 50;

const FALLBACK_TITLE: &str = "Untitled";
const MARKDOWN_SUFFIX: &str = ".md";

static NON_ID_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid id separator regex"));
static SOURCE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})\.md$").expect("valid source date regex")
});

/// Derives the deterministic node id for a section.
///
/// `"{source}-{title}"` is lowercased, runs of non `[a-z0-9]` characters
/// collapse to `-`, edge hyphens are stripped, and the result is cut to
/// [`MAX_NODE_ID_CHARS`]. Truncation happens after stripping, so a cut id may
/// end with `-`.
pub fn generate_node_id(source_identifier: &str, title: &str) -> NodeId {
    let lowered = format!("{source_identifier}-{title}").to_lowercase();
    let collapsed = NON_ID_CHARS_RE.replace_all(&lowered, "-");
    let mut id = collapsed.trim_matches('-').to_string();
    // All remaining characters are ASCII, so byte and char lengths agree.
    id.truncate(MAX_NODE_ID_CHARS);
    id
}

/// Returns the `YYYY-MM-DD` date of daily-log identifiers like
/// `memory/2026-02-08.md`.
pub fn date_from_source(source_identifier: &str) -> Option<String> {
    SOURCE_DATE_RE
        .captures(source_identifier)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Returns the last path segment of an identifier.
pub fn source_file_name(source_identifier: &str) -> &str {
    source_identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(source_identifier)
}

/// Returns the file name without its `.md` suffix, used as the title of
/// heading-less documents.
pub fn document_base_name(source_identifier: &str) -> String {
    let file_name = source_file_name(source_identifier);
    let base = file_name.strip_suffix(MARKDOWN_SUFFIX).unwrap_or(file_name);
    if base.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{date_from_source, document_base_name, generate_node_id, source_file_name};

    #[test]
    fn node_id_collapses_separators_and_lowercases() {
        assert_eq!(
            generate_node_id("memory/2026-02-08.md", "Morning  Walk!"),
            "memory-2026-02-08-md-morning-walk"
        );
        assert_eq!(generate_node_id("MEMORY.md", "  Café notes  "), "memory-md-caf-notes");
    }

    #[test]
    fn node_id_is_truncated_to_fifty_chars() {
        let id = generate_node_id("notes.md", &"word ".repeat(40));
        assert_eq!(id.len(), 50);
        assert!(id.starts_with("notes-md-word-word"));
    }

    #[test]
    fn source_date_requires_trailing_markdown_suffix() {
        assert_eq!(
            date_from_source("memory/2026-02-08.md").as_deref(),
            Some("2026-02-08")
        );
        assert_eq!(date_from_source("memory/2026-02-08.txt"), None);
        assert_eq!(date_from_source("2026-02-08-retro.md"), None);
    }

    #[test]
    fn base_name_strips_directories_and_suffix() {
        assert_eq!(source_file_name("memory/2026-02-08.md"), "2026-02-08.md");
        assert_eq!(document_base_name("memory/2026-02-08.md"), "2026-02-08");
        assert_eq!(document_base_name("notes"), "notes");
        assert_eq!(document_base_name("dir/.md"), "Untitled");
    }
}
