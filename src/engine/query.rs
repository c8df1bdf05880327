//! Query executor — report-shaped queries over a MatrixGraph.

use serde::Serialize;

use crate::graph::MatrixGraph;
use crate::index::ComponentId;
use crate::types::{GraphError, GraphResult, Path, Vertex, VertexSequence};

/// One connected component.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentReport {
    /// Component id, stable until the next mutation.
    pub id: ComponentId,
    /// Member vertices, ascending.
    pub members: VertexSequence,
}

/// All paths that reach their end vertex in the same number of hops.
#[derive(Debug, Clone, Serialize)]
pub struct HopGroup {
    /// Edges between the source and each end vertex.
    pub hops: usize,
    /// One path per vertex at this distance.
    pub paths: Vec<VertexSequence>,
}

/// Summary numbers for a graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    pub directed: bool,
    pub weighted: bool,
    pub components: usize,
    pub largest_component: usize,
    pub isolated_vertices: usize,
}

/// The query engine supports the report queries.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Every component with its members, ordered by smallest member.
    pub fn components(&self, graph: &MatrixGraph) -> Vec<ComponentReport> {
        let mut reports: Vec<ComponentReport> = graph
            .connected_components()
            .iter()
            .map(|(id, members)| ComponentReport {
                id,
                members: members.clone(),
            })
            .collect();
        reports.sort_by_key(|r| r.members.first());
        reports
    }

    /// Vertices grouped by hop distance from `source`.
    ///
    /// Uses a non-duplicate wave, so each reachable vertex appears exactly
    /// once, on one of its fewest-edges paths. Distances run from 1 to the
    /// size of the source's component minus one; empty groups are omitted.
    pub fn hops(&self, graph: &MatrixGraph, source: Vertex) -> GraphResult<Vec<HopGroup>> {
        let tree = graph
            .generate_wave(source, None, false)
            .ok_or(GraphError::VertexOutOfRange {
                vertex: source,
                len: graph.len(),
            })?;

        let max_hops = graph
            .component_of(source)
            .map(|members| members.len().saturating_sub(1))
            .unwrap_or(0);

        let mut paths: Vec<(u64, Path)> = tree.to_paths().into_iter().collect();
        paths.sort_unstable_by_key(|(key, _)| *key);

        let mut groups = Vec::new();
        for hops in 1..=max_hops {
            let group: Vec<VertexSequence> = paths
                .iter()
                .filter(|(_, p)| p.hops() == hops)
                .map(|(_, p)| p.vertices.clone())
                .collect();
            if !group.is_empty() {
                groups.push(HopGroup {
                    hops,
                    paths: group,
                });
            }
        }
        Ok(groups)
    }

    /// Lightest path between two vertices, if they are connected.
    pub fn lightest_path(
        &self,
        graph: &MatrixGraph,
        source: Vertex,
        sink: Vertex,
    ) -> Option<Path> {
        graph
            .minimum_weight_paths(source, Some(sink))
            .remove(sink as u64)
    }

    /// Lightest paths from `source` to every other reachable vertex,
    /// ordered by end vertex.
    pub fn lightest_paths(&self, graph: &MatrixGraph, source: Vertex) -> Vec<Path> {
        let mut paths: Vec<(u64, Path)> = graph
            .minimum_weight_paths(source, None)
            .into_iter()
            .collect();
        paths.sort_unstable_by_key(|(end, _)| *end);
        paths.into_iter().map(|(_, p)| p).collect()
    }

    /// Every fewest-edges path between two vertices, in discovery order.
    pub fn shortest_paths(
        &self,
        graph: &MatrixGraph,
        source: Vertex,
        sink: Vertex,
    ) -> Vec<Path> {
        let mut paths: Vec<(u64, Path)> =
            graph.shortest_paths(source, sink).into_iter().collect();
        paths.sort_unstable_by_key(|(key, _)| *key);
        paths.into_iter().map(|(_, p)| p).collect()
    }

    /// Summary numbers.
    pub fn stats(&self, graph: &MatrixGraph) -> GraphStats {
        let partition = graph.connected_components();
        let largest_component = partition
            .iter()
            .map(|(_, members)| members.len())
            .max()
            .unwrap_or(0);
        let isolated_vertices = (0..graph.len())
            .filter(|&v| graph.degree_out(v) == 0 && graph.degree_in(v) == 0)
            .count();

        GraphStats {
            vertices: graph.len(),
            edges: graph.edge_count(),
            directed: graph.is_directed(),
            weighted: graph.is_weighted(),
            components: partition.len(),
            largest_component,
            isolated_vertices,
        }
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
