use mempalace_core::{filter_graph, GraphStats, Link, MemoryGraph, MemoryNode};

fn node(id: &str, title: &str, content: &str, tags: &[&str], date: Option<&str>) -> MemoryNode {
    MemoryNode {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        date: date.map(str::to_string),
        source: "notes.md".to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        x: None,
        y: None,
    }
}

fn link(source: &str, target: &str) -> Link {
    Link {
        source: source.to_string(),
        target: target.to_string(),
        strength: 0.3,
    }
}

fn sample_graph() -> MemoryGraph {
    MemoryGraph::new(
        vec![
            node("a", "Garden Plan", "tomatoes", &["garden"], Some("2026-02-08")),
            node("b", "Morning run", "5km around the PARK", &["health"], None),
            node("c", "Seeds", "ordered basil", &["garden-supplies"], Some("2026-02-09")),
        ],
        vec![link("a", "b"), link("a", "c"), link("b", "c")],
    )
}

#[test]
fn blank_term_returns_whole_graph() {
    let graph = sample_graph();
    assert_eq!(filter_graph(&graph, "   "), graph);
}

#[test]
fn matches_title_content_and_tags_case_insensitively() {
    let graph = sample_graph();

    let by_title = filter_graph(&graph, "GARDEN");
    let ids = by_title
        .nodes
        .iter()
        .map(|node| node.id.as_str())
        .collect::<Vec<_>>();
    // `c` matches through its `garden-supplies` tag.
    assert_eq!(ids, vec!["a", "c"]);

    let by_content = filter_graph(&graph, "park");
    assert_eq!(by_content.nodes.len(), 1);
    assert_eq!(by_content.nodes[0].id, "b");
}

#[test]
fn links_require_both_endpoints_visible() {
    let filtered = filter_graph(&sample_graph(), "garden");
    assert_eq!(filtered.links, vec![link("a", "c")]);
}

#[test]
fn no_match_yields_empty_graph() {
    let filtered = filter_graph(&sample_graph(), "quantum");
    assert!(filtered.is_empty());
    assert!(filtered.links.is_empty());
}

#[test]
fn stats_summarize_graph() {
    let stats = GraphStats::of(&sample_graph());
    assert_eq!(stats.node_count, 3);
    assert_eq!(stats.link_count, 3);
    assert_eq!(stats.dated_count, 2);
    assert_eq!(
        stats.tags,
        vec![
            "garden".to_string(),
            "garden-supplies".to_string(),
            "health".to_string()
        ]
    );
}
