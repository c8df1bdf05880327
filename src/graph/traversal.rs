//! Graph traversal algorithms: breadth-first waves and path search.

use std::collections::VecDeque;

use crate::index::VertexMap;
use crate::types::{Path, Vertex};

use super::wave::{WaveId, WaveTree};
use super::MatrixGraph;

/// Grow a [`WaveTree`] breadth-first from `source`.
///
/// In duplicate mode a whole frontier is expanded before its discoveries are
/// marked visited, so a vertex reachable from several frontier nodes becomes
/// a separate branch under each of them, and each branch keeps expanding on
/// its own. Otherwise a vertex is claimed by the first node that reaches it.
///
/// Once `sink` is discovered no further nodes are queued, but the nodes
/// already queued are still expanded so that every branch reaching the sink
/// at the same depth is recorded.
///
/// Returns `None` when `source` is out of range.
pub fn generate_wave(
    graph: &MatrixGraph,
    source: Vertex,
    sink: Option<Vertex>,
    duplicate: bool,
) -> Option<WaveTree> {
    if !graph.contains(source) {
        return None;
    }

    let n = graph.len();
    let mut tree = WaveTree::new(source);
    let mut visited = vec![false; n];
    let mut frontier_visited = if duplicate { vec![false; n] } else { Vec::new() };
    visited[source] = true;

    let mut queue: VecDeque<WaveId> = VecDeque::new();
    queue.push_back(tree.root());
    let mut sink_found = false;

    while !queue.is_empty() {
        let batch = if duplicate { queue.len() } else { 1 };

        for _ in 0..batch {
            let Some(id) = queue.pop_front() else {
                break;
            };
            let i = tree.vertex(id);

            for (j, _) in graph.neighbors(i) {
                if visited[j] {
                    continue;
                }
                if duplicate {
                    frontier_visited[j] = true;
                } else {
                    visited[j] = true;
                }

                let child = tree.add(id, j);
                sink_found |= sink == Some(j);
                if !sink_found {
                    queue.push_back(child);
                }
            }
        }

        if duplicate {
            for (seen, claimed) in visited.iter_mut().zip(frontier_visited.iter_mut()) {
                *seen |= *claimed;
                *claimed = false;
            }
        }
    }

    log::debug!(
        "wave from {} (sink {:?}, duplicate {}): {} nodes, depth {}",
        source,
        sink,
        duplicate,
        tree.len(),
        tree.max_depth()
    );
    Some(tree)
}

/// Every fewest-edges path from `source` to `sink`.
///
/// Paths are keyed 0.. in the order the duplicate-mode wave discovers them
/// and weigh their edge count. `source == sink` yields the single trivial
/// path; unreachable or out-of-range pairs yield an empty map.
pub fn shortest_paths(graph: &MatrixGraph, source: Vertex, sink: Vertex) -> VertexMap<Path> {
    let mut result = VertexMap::new();
    if !graph.reachable(source, sink) {
        return result;
    }
    if source == sink {
        result.insert(0, Path::single(source));
        return result;
    }

    let Some(tree) = generate_wave(graph, source, Some(sink), true) else {
        return result;
    };

    let mut traces: Vec<(u64, Path)> = tree
        .to_paths()
        .into_iter()
        .filter(|(_, path)| path.end() == Some(sink))
        .collect();
    traces.sort_unstable_by_key(|(key, _)| *key);

    for (next_key, (_, path)) in traces.into_iter().enumerate() {
        result.insert(next_key as u64, path);
    }
    result
}

/// Lightest paths from `source`, keyed by end vertex.
///
/// Label-correcting relaxation over a FIFO work queue: a vertex is queued
/// again each time its best weight strictly drops, so vertices may be
/// expanded more than once. With non-negative weights every improved path
/// is simple. An improvement that would need more than `len` vertices can
/// only come from a negative cycle, and relaxation stops there with the best
/// paths found so far.
///
/// With `sink` set, the pair must be reachable and the sink itself is never
/// expanded. With `sink` unset, every reachable vertex gets a path. The
/// trivial path of `source` is never part of the result.
pub fn minimum_weight_paths(
    graph: &MatrixGraph,
    source: Vertex,
    sink: Option<Vertex>,
) -> VertexMap<Path> {
    let mut result = VertexMap::new();
    if !graph.contains(source) {
        return result;
    }
    if let Some(target) = sink {
        if !graph.reachable(source, target) {
            return result;
        }
    }

    let n = graph.len();
    let mut best: Vec<Option<Path>> = vec![None; n];
    best[source] = Some(Path::single(source));

    let mut queue: VecDeque<Vertex> = VecDeque::new();
    queue.push_back(source);
    let mut expansions = 0usize;

    'relax: while let Some(i) = queue.pop_front() {
        if sink == Some(i) {
            continue;
        }
        let Some(base) = best[i].clone() else {
            continue;
        };
        expansions += 1;

        for (j, w) in graph.neighbors(i) {
            let candidate = base.weight + w as i64;
            let improves = match &best[j] {
                Some(current) => candidate < current.weight,
                None => true,
            };
            if !improves {
                continue;
            }

            if base.vertices.len() >= n {
                log::warn!(
                    "negative cycle reached through vertex {}; stopping relaxation from {}",
                    j,
                    source
                );
                break 'relax;
            }

            log::trace!("relax {} -> {}: {}", i, j, candidate);
            best[j] = Some(base.extended(j, w as i64));
            queue.push_back(j);
        }
    }

    log::debug!(
        "minimum-weight relaxation from {} expanded {} vertices",
        source,
        expansions
    );

    for (vertex, path) in best.into_iter().enumerate() {
        match path {
            Some(path) if vertex != source => {
                result.insert(vertex as u64, path);
            }
            _ => {}
        }
    }
    result
}
