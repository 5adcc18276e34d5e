//! Markdown document to memory node extraction.
//!
//! # Responsibility
//! - Split one markdown document into heading-delimited sections.
//! - Carry date context forward from filenames and date headings.
//! - Build fully-derived `MemoryNode` records (id, trimmed content, tags).
//!
//! # Invariants
//! - Lines are processed strictly in document order.
//! - A section node is emitted only when its trimmed content is non-empty.
//! - A non-blank document always yields at least one node.
//! - Extraction never fails; unmatched headings fall through as content.

use crate::config::GraphConfig;
use crate::extract::ident::{
    date_from_source, document_base_name, generate_node_id, source_file_name,
};
use crate::extract::tags::extract_tags;
use crate::model::memory::{is_iso_date, MemoryNode};

/// Line classification for one scan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'t> {
    /// `# text`. May switch the date context.
    Heading1(&'t str),
    /// `## text`.
    Heading2(&'t str),
    /// Anything else, including deeper headings and blank lines.
    Content(&'t str),
}

fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(text) = line.strip_prefix("# ").filter(|text| !text.is_empty()) {
        return LineKind::Heading1(text);
    }
    if let Some(text) = line.strip_prefix("## ").filter(|text| !text.is_empty()) {
        return LineKind::Heading2(text);
    }
    LineKind::Content(line)
}

/// Builds nodes for one source document.
struct NodeFactory<'a> {
    source_identifier: &'a str,
    keywords: &'a [String],
}

impl NodeFactory<'_> {
    fn build(&self, title: &str, content: &str, date: Option<&str>) -> MemoryNode {
        let content = content.trim();
        MemoryNode {
            id: generate_node_id(self.source_identifier, title),
            title: title.to_string(),
            content: content.to_string(),
            date: date.map(str::to_string),
            source: source_file_name(self.source_identifier).to_string(),
            tags: extract_tags(content, self.keywords),
            x: None,
            y: None,
        }
    }
}

/// Accumulator threaded through the line fold.
struct ScanState<'t> {
    current_title: Option<&'t str>,
    current_date: Option<String>,
    buffer: Vec<&'t str>,
    nodes: Vec<MemoryNode>,
}

impl<'t> ScanState<'t> {
    fn new(initial_date: Option<String>) -> Self {
        Self {
            current_title: None,
            current_date: initial_date,
            buffer: Vec::new(),
            nodes: Vec::new(),
        }
    }

    fn step(mut self, line: &'t str, factory: &NodeFactory<'_>) -> Self {
        match classify_line(line) {
            LineKind::Heading1(text) => {
                self.close_section(factory);
                self.current_title = Some(text);
                if is_iso_date(text) {
                    self.current_date = Some(text.to_string());
                }
            }
            LineKind::Heading2(text) => {
                self.close_section(factory);
                self.current_title = Some(text);
            }
            LineKind::Content(text) => self.buffer.push(text),
        }
        self
    }

    /// Emits the open section when it has content, then clears the buffer.
    ///
    /// Lines buffered before the first heading have no title and are dropped.
    fn close_section(&mut self, factory: &NodeFactory<'_>) {
        if let Some(title) = self.current_title {
            if self.buffer.iter().any(|line| !line.trim().is_empty()) {
                let content = self.buffer.join("\n");
                let node = factory.build(title, &content, self.current_date.as_deref());
                self.nodes.push(node);
            }
        }
        self.buffer.clear();
    }
}

/// Extracts ordered memory nodes from one markdown document.
///
/// `source_identifier` is the document path relative to the memory root
/// (e.g. `memory/2026-02-08.md`). It seeds node ids and the filename date;
/// nodes record only its last path segment as `source`.
///
/// Rules:
/// - `# ` and `## ` lines start a new section titled with the heading text.
/// - A `# YYYY-MM-DD` heading switches the date for every later section.
/// - Heading-less, non-blank documents become one node titled with the
///   file base name.
/// - Blank documents yield no nodes.
pub fn extract_memories(
    text: &str,
    source_identifier: &str,
    config: &GraphConfig,
) -> Vec<MemoryNode> {
    let factory = NodeFactory {
        source_identifier,
        keywords: &config.keywords,
    };

    let mut state = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .fold(
            ScanState::new(date_from_source(source_identifier)),
            |state, line| state.step(line, &factory),
        );
    state.close_section(&factory);

    if state.nodes.is_empty() && !text.trim().is_empty() {
        let title = document_base_name(source_identifier);
        let node = factory.build(&title, text, state.current_date.as_deref());
        state.nodes.push(node);
    }

    state.nodes
}

#[cfg(test)]
mod tests {
    use super::{classify_line, LineKind};

    #[test]
    fn classify_requires_single_space_and_text() {
        assert_eq!(classify_line("# Title"), LineKind::Heading1("Title"));
        assert_eq!(classify_line("## Sub"), LineKind::Heading2("Sub"));
        assert_eq!(classify_line("#Title"), LineKind::Content("#Title"));
        assert_eq!(classify_line("# "), LineKind::Content("# "));
        assert_eq!(classify_line("### Deep"), LineKind::Content("### Deep"));
        assert_eq!(classify_line(""), LineKind::Content(""));
    }

    #[test]
    fn heading_text_keeps_inner_spacing() {
        assert_eq!(classify_line("#  padded"), LineKind::Heading1(" padded"));
    }
}
