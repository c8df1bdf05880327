//! Phase 4 tests: edge-list loading, query engine, CLI integration.

use std::io::Cursor;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use wavegraph::engine::QueryEngine;
use wavegraph::format::EdgeListReader;
use wavegraph::graph::GraphOptions;
use wavegraph::types::GraphError;

// ==================== Helpers ====================

const SAMPLE: &str = "6 5\n1 2 4\n1 3 1\n3 2 1\n2 4 2\n5 6 7\n";

fn undirected() -> GraphOptions {
    GraphOptions::default()
}

/// Write `text` to a fresh temporary file.
fn edge_file(text: &str) -> NamedTempFile {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), text).unwrap();
    tmp
}

/// Locate the `wgraph` binary built alongside test binaries.
fn wgraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("wgraph");
    path
}

/// Run the `wgraph` CLI with the given arguments and return the output.
fn run_wgraph(args: &[&str]) -> Output {
    Command::new(wgraph_bin())
        .args(args)
        .output()
        .expect("Failed to run wgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "wgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ==================== Reader Tests ====================

#[test]
fn test_read_edge_list() {
    let graph = EdgeListReader::parse(SAMPLE, undirected()).unwrap();
    assert_eq!(graph.len(), 6);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.get_weight(0, 1), 4);
    assert_eq!(graph.get_weight(1, 0), 4);
    assert_eq!(graph.get_weight(4, 5), 7);
    assert!(!graph.has_edge(0, 3));
}

#[test]
fn test_read_from_file() {
    let tmp = edge_file(SAMPLE);
    let graph = EdgeListReader::read_from_file(tmp.path(), undirected()).unwrap();
    assert_eq!(graph.len(), 6);
    assert!(graph.reachable(0, 3));
    assert!(!graph.reachable(0, 4));
}

#[test]
fn test_read_from_buffer() {
    let mut cursor = Cursor::new(SAMPLE.as_bytes());
    let options = GraphOptions {
        directed: true,
        weighted: false,
    };
    let graph = EdgeListReader::read_from(&mut cursor, options).unwrap();
    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
    assert_eq!(graph.get_weight(4, 5), 1);
}

#[test]
fn test_read_truncated() {
    let err = EdgeListReader::parse("3 3\n1 2 1\n", undirected()).unwrap_err();
    match err {
        GraphError::Truncated { expected, found } => {
            assert_eq!(expected, 3);
            assert_eq!(found, 1);
        }
        other => panic!("expected Truncated, got {:?}", other),
    }
}

#[test]
fn test_read_zero_index_rejected() {
    let err = EdgeListReader::parse("3 1\n0 1 1\n", undirected()).unwrap_err();
    assert!(matches!(err, GraphError::Parse { .. }));
}

#[test]
fn test_read_bad_token() {
    let err = EdgeListReader::parse("3 x\n", undirected()).unwrap_err();
    assert!(matches!(err, GraphError::Parse { position: 2, .. }));

    let err = EdgeListReader::parse("", undirected()).unwrap_err();
    assert!(matches!(err, GraphError::Parse { position: 1, .. }));
}

#[test]
fn test_read_skips_out_of_range_edges() {
    let graph = EdgeListReader::parse("2 2\n1 2 3\n1 5 1\n", undirected()).unwrap();
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_read_missing_file() {
    let err = EdgeListReader::read_from_file(
        std::path::Path::new("/nonexistent/graph.txt"),
        undirected(),
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}

// ==================== Query Engine Tests ====================

#[test]
fn test_query_components() {
    let graph = EdgeListReader::parse(SAMPLE, undirected()).unwrap();
    let reports = QueryEngine::new().components(&graph);

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].members.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(reports[1].members.as_slice(), &[4, 5]);
    assert_ne!(reports[0].id, reports[1].id);
}

#[test]
fn test_query_hops() {
    let graph = EdgeListReader::parse(SAMPLE, undirected()).unwrap();
    let groups = QueryEngine::new().hops(&graph, 0).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].hops, 1);
    assert_eq!(groups[0].paths.len(), 2);
    assert_eq!(groups[1].hops, 2);
    assert_eq!(groups[1].paths.len(), 1);
    assert_eq!(groups[1].paths[0].as_slice(), &[0, 1, 3]);
}

#[test]
fn test_query_hops_out_of_range() {
    let graph = EdgeListReader::parse(SAMPLE, undirected()).unwrap();
    let err = QueryEngine::new().hops(&graph, 6).unwrap_err();
    assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 6, len: 6 }));
}

#[test]
fn test_query_lightest() {
    let graph = EdgeListReader::parse(SAMPLE, undirected()).unwrap();
    let engine = QueryEngine::new();

    let path = engine.lightest_path(&graph, 0, 1).unwrap();
    assert_eq!(path.vertices.as_slice(), &[0, 2, 1]);
    assert_eq!(path.weight, 2);
    assert!(engine.lightest_path(&graph, 0, 5).is_none());

    let all = engine.lightest_paths(&graph, 0);
    let ends: Vec<usize> = all.iter().filter_map(|p| p.end()).collect();
    assert_eq!(ends, vec![1, 2, 3]);
    assert_eq!(all[2].weight, 4);
}

#[test]
fn test_query_shortest_in_order() {
    let graph = EdgeListReader::parse(SAMPLE, undirected()).unwrap();
    let paths = QueryEngine::new().shortest_paths(&graph, 0, 3);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].vertices.as_slice(), &[0, 1, 3]);
}

#[test]
fn test_query_stats() {
    let graph = EdgeListReader::parse("7 3\n1 2 1\n2 3 1\n5 6 1\n", undirected()).unwrap();
    let stats = QueryEngine::new().stats(&graph);

    assert_eq!(stats.vertices, 7);
    assert_eq!(stats.edges, 3);
    assert!(!stats.directed);
    assert!(stats.weighted);
    assert_eq!(stats.components, 4);
    assert_eq!(stats.largest_component, 3);
    assert_eq!(stats.isolated_vertices, 2);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["components"], 4);
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let tmp = edge_file(SAMPLE);
    let path = tmp.path().to_str().unwrap();

    let output = run_wgraph(&["info", path]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Vertices: 6"), "Expected vertex count in: {}", out);
    assert!(out.contains("Components: 2"), "Expected components in: {}", out);
}

#[test]
fn test_cli_matrix() {
    let tmp = edge_file("2 1\n1 2 3\n");
    let output = run_wgraph(&["matrix", tmp.path().to_str().unwrap()]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "(  -,  3)\n(  3,  -)\n");
}

#[test]
fn test_cli_shortest_one_based() {
    let tmp = edge_file(SAMPLE);
    let output = run_wgraph(&["shortest", tmp.path().to_str().unwrap(), "1", "4"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("1-2-4"), "Expected 1-based path in: {}", out);
}

#[test]
fn test_cli_lightest_json() {
    let tmp = edge_file(SAMPLE);
    let output = run_wgraph(&[
        "--format",
        "json",
        "lightest",
        tmp.path().to_str().unwrap(),
        "1",
        "2",
    ]);
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value[0]["weight"], 2);
    assert_eq!(value[0]["vertices"], serde_json::json!([1, 3, 2]));
}

#[test]
fn test_cli_components_json() {
    let tmp = edge_file(SAMPLE);
    let output = run_wgraph(&["--format", "json", "components", tmp.path().to_str().unwrap()]);
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["members"], serde_json::json!([5, 6]));
}

#[test]
fn test_cli_reachable_directed() {
    let tmp = edge_file("3 1\n1 2 1\n");
    let path = tmp.path().to_str().unwrap();

    let output = run_wgraph(&["--directed", "reachable", path, "2", "1"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("yes"));

    let output = run_wgraph(&["reachable", path, "1", "3"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("no"));
}

#[test]
fn test_cli_hops_and_wave() {
    let tmp = edge_file(SAMPLE);
    let path = tmp.path().to_str().unwrap();

    let output = run_wgraph(&["hops", path, "1"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("2 hop(s) away"));

    let output = run_wgraph(&["--unweighted", "wave", path, "1", "--sink", "4", "--duplicate"]);
    assert_success(&output);
    assert!(stdout_str(&output).starts_with("1\n"));
}

#[test]
fn test_cli_exit_codes() {
    let tmp = edge_file(SAMPLE);
    let path = tmp.path().to_str().unwrap();

    let output = run_wgraph(&["shortest", path, "0", "2"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run_wgraph(&["shortest", path, "1", "7"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run_wgraph(&["info", "/nonexistent/graph.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let truncated = edge_file("3 2\n1 2 1\n");
    let output = run_wgraph(&["info", truncated.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}
