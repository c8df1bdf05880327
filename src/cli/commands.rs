//! CLI command implementations.
//!
//! Vertices are 1-based on the command line and in every printed report.

use std::path::Path;

use crate::engine::QueryEngine;
use crate::format::EdgeListReader;
use crate::graph::{GraphOptions, MatrixGraph};
use crate::types::{GraphError, GraphResult, Path as GraphPath, Vertex, VertexSequence};

/// Print the adjacency matrix.
pub fn cmd_matrix(path: &Path, options: GraphOptions) -> GraphResult<()> {
    let graph = load(path, options)?;
    print!("{}", graph.display_matrix());
    Ok(())
}

/// Display summary information about an edge-list file.
pub fn cmd_info(path: &Path, options: GraphOptions, json: bool) -> GraphResult<()> {
    let graph = load(path, options)?;
    let stats = QueryEngine::new().stats(&graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", stats.vertices);
        println!("Edges: {}", stats.edges);
        println!("Directed: {}", stats.directed);
        println!("Weighted: {}", stats.weighted);
        println!("Components: {}", stats.components);
        println!("Largest component: {}", stats.largest_component);
        println!("Isolated vertices: {}", stats.isolated_vertices);
    }
    Ok(())
}

/// List connected components.
pub fn cmd_components(path: &Path, options: GraphOptions, json: bool) -> GraphResult<()> {
    let graph = load(path, options)?;
    let reports = QueryEngine::new().components(&graph);

    if json {
        let components: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| serde_json::json!({"id": r.id, "members": one_based(&r.members)}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&components).unwrap_or_default()
        );
    } else {
        for (n, report) in reports.iter().enumerate() {
            let members: Vec<String> = one_based(&report.members)
                .iter()
                .map(|v| v.to_string())
                .collect();
            println!(
                "Component {} ({}): {}",
                n + 1,
                report.id,
                members.join(" ")
            );
        }
    }
    Ok(())
}

/// Report whether two vertices are connected.
pub fn cmd_reachable(
    path: &Path,
    options: GraphOptions,
    from: usize,
    to: usize,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, options)?;
    let u = to_index(&graph, from)?;
    let v = to_index(&graph, to)?;
    let reachable = graph.reachable(u, v);

    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "reachable": reachable})
        );
    } else {
        println!(
            "v{} ~ v{}: {}",
            from,
            to,
            if reachable { "yes" } else { "no" }
        );
    }
    Ok(())
}

/// Print every fewest-edges path between two vertices.
pub fn cmd_shortest(
    path: &Path,
    options: GraphOptions,
    from: usize,
    to: usize,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, options)?;
    let u = to_index(&graph, from)?;
    let v = to_index(&graph, to)?;
    let paths = QueryEngine::new().shortest_paths(&graph, u, v);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&paths_json(&paths)).unwrap_or_default()
        );
    } else if paths.is_empty() {
        println!("No path between v{} and v{}", from, to);
    } else {
        println!("Shortest paths ({} hops):", paths[0].hops());
        for (n, p) in paths.iter().enumerate() {
            println!("  ({}) {}", n + 1, render(&p.vertices));
        }
    }
    Ok(())
}

/// Print the lightest path to one vertex, or to every reachable vertex.
pub fn cmd_lightest(
    path: &Path,
    options: GraphOptions,
    from: usize,
    to: Option<usize>,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, options)?;
    let u = to_index(&graph, from)?;
    let engine = QueryEngine::new();

    let paths: Vec<GraphPath> = match to {
        Some(to) => {
            let v = to_index(&graph, to)?;
            engine.lightest_path(&graph, u, v).into_iter().collect()
        }
        None => engine.lightest_paths(&graph, u),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&paths_json(&paths)).unwrap_or_default()
        );
    } else if paths.is_empty() {
        println!("No reachable destination from v{}", from);
    } else {
        for p in &paths {
            let end = p.end().map(|v| v + 1).unwrap_or(0);
            println!(
                " {:>2} to {:>2}:  {}: {}",
                from,
                end,
                render(&p.vertices),
                p.weight
            );
        }
    }
    Ok(())
}

/// Print reachable vertices grouped by hop distance.
pub fn cmd_hops(path: &Path, options: GraphOptions, from: usize, json: bool) -> GraphResult<()> {
    let graph = load(path, options)?;
    let u = to_index(&graph, from)?;
    let groups = QueryEngine::new().hops(&graph, u)?;

    if json {
        let out: Vec<serde_json::Value> = groups
            .iter()
            .map(|g| {
                let paths: Vec<Vec<usize>> = g.paths.iter().map(one_based).collect();
                serde_json::json!({"hops": g.hops, "paths": paths})
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        for group in &groups {
            let rendered: Vec<String> = group.paths.iter().map(render).collect();
            println!("{} hop(s) away:", group.hops);
            println!("  {}", rendered.join(", "));
        }
    }
    Ok(())
}

/// Print the wave tree grown from a vertex.
pub fn cmd_wave(
    path: &Path,
    options: GraphOptions,
    from: usize,
    to: Option<usize>,
    duplicate: bool,
) -> GraphResult<()> {
    let graph = load(path, options)?;
    let u = to_index(&graph, from)?;
    let sink = to.map(|to| to_index(&graph, to)).transpose()?;

    let tree = graph
        .generate_wave(u, sink, duplicate)
        .ok_or(GraphError::VertexOutOfRange {
            vertex: from,
            len: graph.len(),
        })?;

    print!("{}", tree.display_offset(1));
    Ok(())
}

fn load(path: &Path, options: GraphOptions) -> GraphResult<MatrixGraph> {
    EdgeListReader::read_from_file(path, options)
}

/// Convert a 1-based command-line vertex to an index.
fn to_index(graph: &MatrixGraph, vertex: usize) -> GraphResult<Vertex> {
    if vertex == 0 || vertex > graph.len() {
        return Err(GraphError::VertexOutOfRange {
            vertex,
            len: graph.len(),
        });
    }
    Ok(vertex - 1)
}

fn one_based(seq: &VertexSequence) -> Vec<usize> {
    seq.iter().map(|v| v + 1).collect()
}

fn render(seq: &VertexSequence) -> String {
    let parts: Vec<String> = seq.iter().map(|v| (v + 1).to_string()).collect();
    parts.join("-")
}

fn paths_json(paths: &[GraphPath]) -> Vec<serde_json::Value> {
    paths
        .iter()
        .map(|p| serde_json::json!({"vertices": one_based(&p.vertices), "weight": p.weight}))
        .collect()
}
