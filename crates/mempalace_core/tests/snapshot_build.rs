use chrono::{TimeZone, Utc};
use mempalace_core::{
    build_graph, build_snapshot, collect_documents, load_snapshot, load_snapshot_or_empty,
    snapshot_from_documents, write_snapshot, GraphConfig, MemorySnapshot, SnapshotError, SourceDocument, SourceLayout,
};
use std::fs;
use std::path::Path;

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "MEMORY.md",
        "# People\nMiguel is a person I trust\n## Garden Project\nimportant: plant tomatoes #garden\n",
    );
    write_file(
        dir.path(),
        "memory/2026-02-09.md",
        "## Garden Project review\ntomatoes sprouted #garden\n## Evening\nread\n",
    );
    write_file(
        dir.path(),
        "memory/2026-02-08.md",
        "## Morning\nrun #health\n## Lunch\nsalad #health\n",
    );
    write_file(dir.path(), "memory/notes.txt", "ignored");
    dir
}

#[test]
fn collect_reads_long_term_file_then_sorted_daily_logs() {
    let dir = fixture_dir();
    let documents = collect_documents(dir.path(), &SourceLayout::default()).unwrap();
    let identifiers = documents
        .iter()
        .map(|doc| doc.identifier.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        identifiers,
        vec!["MEMORY.md", "memory/2026-02-08.md", "memory/2026-02-09.md"]
    );
}

#[test]
fn collect_skips_missing_sources() {
    let dir = tempfile::tempdir().unwrap();
    let documents = collect_documents(dir.path(), &SourceLayout::default()).unwrap();
    assert!(documents.is_empty());
}

#[test]
fn build_snapshot_links_across_documents() {
    let dir = fixture_dir();
    let generated_at = Utc.with_ymd_and_hms(2026, 2, 9, 8, 30, 0).unwrap();
    let snapshot = build_snapshot(
        dir.path(),
        &GraphConfig::default(),
        &SourceLayout::default(),
        generated_at,
    )
    .unwrap();

    assert_eq!(snapshot.last_updated, "2026-02-09T08:30:00.000Z");
    assert_eq!(snapshot.source, dir.path().display().to_string());
    assert_eq!(snapshot.nodes.len(), 6);
    assert!(snapshot.validate().is_ok());

    let garden = snapshot
        .links
        .iter()
        .find(|link| {
            link.source == "memory-md-garden-project"
                && link.target == "memory-2026-02-09-md-garden-project-review"
        })
        .expect("garden sections should be linked");
    // shared tag `garden` + shared title words `garden`, `project`
    assert!((garden.strength - 0.6).abs() < 1e-9);

    let same_day = snapshot
        .links
        .iter()
        .find(|link| {
            link.source == "memory-2026-02-08-md-morning"
                && link.target == "memory-2026-02-08-md-lunch"
        })
        .expect("same-day sections should be linked");
    // shared tag `health` + same date
    assert!((same_day.strength - 0.5).abs() < 1e-9);
}

#[test]
fn rebuilding_unchanged_input_is_idempotent() {
    let dir = fixture_dir();
    let documents = collect_documents(dir.path(), &SourceLayout::default()).unwrap();
    let first = build_graph(&documents, &GraphConfig::default());
    let second = build_graph(&documents, &GraphConfig::default());
    assert_eq!(first, second);
}

#[test]
fn build_graph_keeps_ids_unique_across_documents() {
    let long_title = "x".repeat(60);
    let documents = vec![
        SourceDocument::new("notes.md", format!("# {long_title}a\none\n")),
        SourceDocument::new("notes.md", format!("# {long_title}b\ntwo\n")),
    ];
    let graph = build_graph(&documents, &GraphConfig::default());
    assert_eq!(graph.nodes.len(), 2);
    assert_ne!(graph.nodes[0].id, graph.nodes[1].id);
    assert!(graph.nodes.iter().all(|node| node.id.len() <= 50));
    assert!(graph.validate().is_ok());
}

#[test]
fn snapshot_json_uses_display_field_names() {
    let graph = build_graph(
        &[SourceDocument::new("notes.md", "# A\n#x one\n# B\n#x two\n")],
        &GraphConfig::default(),
    );
    let snapshot = MemorySnapshot::new(graph, "/memories", Utc::now());
    let json = serde_json::to_value(&snapshot).unwrap();

    assert!(json["lastUpdated"].is_string());
    assert_eq!(json["source"], "/memories");
    assert_eq!(json["nodes"][0]["id"], "notes-md-a");
    assert!(json["nodes"][0].get("date").is_none());
    assert!(json["nodes"][0].get("x").is_none());
    assert_eq!(json["links"][0]["source"], "notes-md-a");
    assert_eq!(json["links"][0]["target"], "notes-md-b");
}

#[test]
fn write_then_load_round_trips_and_replaces() {
    let dir = fixture_dir();
    let output = dir.path().join("public/memories.json");
    let snapshot = build_snapshot(
        dir.path(),
        &GraphConfig::default(),
        &SourceLayout::default(),
        Utc::now(),
    )
    .unwrap();

    write_snapshot(&snapshot, &output).unwrap();
    let loaded = load_snapshot(&output).unwrap();
    assert_eq!(loaded.nodes, snapshot.nodes);
    assert_eq!(loaded.links.len(), snapshot.links.len());
    assert_eq!(loaded.last_updated, snapshot.last_updated);

    let empty = MemorySnapshot::empty(Utc::now());
    write_snapshot(&empty, &output).unwrap();
    assert!(load_snapshot(&output).unwrap().nodes.is_empty());
    assert!(!dir.path().join("public/memories.json.tmp").exists());
}

#[test]
fn load_preserves_layout_positions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memories.json");
    fs::write(
        &path,
        r#"{
            "nodes": [
                {"id": "a", "title": "A", "content": "x", "source": "n.md", "tags": [], "x": 12.5, "y": -3.0}
            ],
            "links": [],
            "lastUpdated": "2026-02-08T00:00:00.000Z"
        }"#,
    )
    .unwrap();

    let snapshot = load_snapshot(&path).unwrap();
    assert_eq!(snapshot.nodes[0].x, Some(12.5));
    assert_eq!(snapshot.nodes[0].y, Some(-3.0));
    assert_eq!(snapshot.source, "");
}

#[test]
fn load_rejects_links_to_unknown_nodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memories.json");
    fs::write(
        &path,
        r#"{"nodes": [], "links": [{"source": "a", "target": "b", "strength": 0.3}], "lastUpdated": "now"}"#,
    )
    .unwrap();

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Validation(_)));
}

#[test]
fn load_or_empty_falls_back_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = load_snapshot_or_empty(dir.path().join("missing.json"));
    assert!(snapshot.nodes.is_empty());
    assert!(snapshot.links.is_empty());
    assert!(snapshot.last_updated.ends_with('Z'));
}

#[test]
fn load_reports_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memories.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        load_snapshot(&path).unwrap_err(),
        SnapshotError::Json(_)
    ));
}

#[test]
fn collected_documents_build_the_same_snapshot() {
    let dir = fixture_dir();
    let generated_at = Utc.with_ymd_and_hms(2026, 2, 9, 8, 30, 0).unwrap();
    let documents = collect_documents(dir.path(), &SourceLayout::default()).unwrap();
    assert_eq!(documents.len(), 3);

    let from_documents = snapshot_from_documents(
        &documents,
        dir.path().display().to_string(),
        &GraphConfig::default(),
        generated_at,
    );
    let from_dir = build_snapshot(
        dir.path(),
        &GraphConfig::default(),
        &SourceLayout::default(),
        generated_at,
    )
    .unwrap();
    assert_eq!(from_documents, from_dir);
}
