//! Core graph structure — a dense adjacency matrix with a component cache.

use std::cell::OnceCell;
use std::collections::VecDeque;

use crate::format::MatrixDisplay;
use crate::index::{ComponentId, ComponentPartition, VertexMap};
use crate::types::{
    GraphError, GraphResult, Path, Vertex, VertexSequence, Weight, NO_EDGE_UNWEIGHTED,
    NO_EDGE_WEIGHTED,
};

use super::traversal;
use super::WaveTree;

/// Shape of a graph, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Edges are one-way when true; otherwise every write is mirrored.
    pub directed: bool,
    /// Edges carry integer weights when true; otherwise any non-zero
    /// weight is stored as 1.
    pub weighted: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: true,
        }
    }
}

/// In-memory graph over the fixed vertex set `[0, len)`.
///
/// The matrix stores a weight per ordered pair; the sentinel
/// ([`NO_EDGE_WEIGHTED`] or [`NO_EDGE_UNWEIGHTED`]) marks a missing edge.
/// The connected-component partition is computed on first use and dropped
/// by every mutation that reaches the matrix.
#[derive(Debug)]
pub struct MatrixGraph {
    options: GraphOptions,
    len: usize,
    /// Row-major `len * len` weights.
    matrix: Vec<Weight>,
    components: OnceCell<ComponentPartition>,
}

impl MatrixGraph {
    /// Create a graph with `len` vertices and no edges.
    pub fn new(directed: bool, weighted: bool, len: usize) -> Self {
        Self::with_options(GraphOptions { directed, weighted }, len)
    }

    /// Create a graph with `len` vertices and no edges.
    pub fn with_options(options: GraphOptions, len: usize) -> Self {
        let sentinel = sentinel_for(options.weighted);
        Self {
            options,
            len,
            matrix: vec![sentinel; len * len],
            components: OnceCell::new(),
        }
    }

    /// Like [`MatrixGraph::with_options`], but reports a matrix that cannot
    /// be allocated instead of aborting.
    pub fn try_with_options(options: GraphOptions, len: usize) -> GraphResult<Self> {
        let cells = len
            .checked_mul(len)
            .ok_or_else(|| GraphError::Allocation(format!("{len}x{len} matrix overflows")))?;

        let mut matrix = Vec::new();
        matrix.try_reserve_exact(cells)?;
        matrix.resize(cells, sentinel_for(options.weighted));

        Ok(Self {
            options,
            len,
            matrix,
            components: OnceCell::new(),
        })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Construction options.
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.options.weighted
    }

    /// The "no edge" value for this graph.
    pub fn sentinel(&self) -> Weight {
        sentinel_for(self.options.weighted)
    }

    /// Whether `vertex` names a vertex of this graph.
    pub fn contains(&self, vertex: Vertex) -> bool {
        vertex < self.len
    }

    /// Whether the component cache currently holds a partition.
    pub fn is_clean(&self) -> bool {
        self.components.get().is_some()
    }

    // ==================== Mutation ====================

    /// Add or overwrite the edge `(i, j)`.
    ///
    /// Out-of-range vertices are ignored. In unweighted graphs any non-zero
    /// weight is stored as 1. Writing the weight already stored leaves the
    /// component cache intact.
    pub fn add_weighted_edge(&mut self, i: Vertex, j: Vertex, weight: Weight) {
        if !self.contains(i) || !self.contains(j) {
            return;
        }

        let weight = if !self.options.weighted && weight != 0 {
            1
        } else {
            weight
        };
        if self.matrix[i * self.len + j] == weight {
            return;
        }

        self.invalidate_cache();
        self.write(i, j, weight);
    }

    /// Add the edge `(i, j)` with weight 1.
    pub fn add_edge(&mut self, i: Vertex, j: Vertex) {
        self.add_weighted_edge(i, j, 1);
    }

    /// Remove the edge `(i, j)` (and `(j, i)` when undirected).
    pub fn remove_edge(&mut self, i: Vertex, j: Vertex) {
        if !self.contains(i) || !self.contains(j) {
            return;
        }

        self.invalidate_cache();
        let sentinel = self.sentinel();
        self.write(i, j, sentinel);
    }

    /// Drop the cached component partition. Idempotent.
    pub fn invalidate_cache(&mut self) {
        if self.components.take().is_some() {
            log::trace!("component cache invalidated");
        }
    }

    fn write(&mut self, i: Vertex, j: Vertex, weight: Weight) {
        self.matrix[i * self.len + j] = weight;
        if !self.options.directed {
            self.matrix[j * self.len + i] = weight;
        }
    }

    // ==================== Edge queries ====================

    /// Whether the edge `(i, j)` exists. Out of range yields `false`.
    pub fn has_edge(&self, i: Vertex, j: Vertex) -> bool {
        self.get_weight(i, j) != self.sentinel()
    }

    /// Stored weight of `(i, j)`, or the sentinel when absent or out of range.
    pub fn get_weight(&self, i: Vertex, j: Vertex) -> Weight {
        if !self.contains(i) || !self.contains(j) {
            return self.sentinel();
        }
        self.matrix[i * self.len + j]
    }

    /// Row `vertex` of the matrix.
    pub fn row(&self, vertex: Vertex) -> Option<&[Weight]> {
        if !self.contains(vertex) {
            return None;
        }
        let start = vertex * self.len;
        Some(&self.matrix[start..start + self.len])
    }

    /// Outgoing `(neighbor, weight)` pairs of `vertex`, ascending by neighbor.
    pub fn neighbors(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        let sentinel = self.sentinel();
        self.row(vertex)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter(move |(_, &w)| w != sentinel)
            .map(|(j, &w)| (j, w))
    }

    /// Number of edges leaving `vertex`; 0 when out of range.
    pub fn degree_out(&self, vertex: Vertex) -> usize {
        self.neighbors(vertex).count()
    }

    /// Number of edges entering `vertex`; 0 when out of range.
    pub fn degree_in(&self, vertex: Vertex) -> usize {
        if !self.contains(vertex) {
            return 0;
        }
        let sentinel = self.sentinel();
        (0..self.len)
            .filter(|&i| self.matrix[i * self.len + vertex] != sentinel)
            .count()
    }

    /// Number of edges. Undirected edges are counted once.
    pub fn edge_count(&self) -> usize {
        let sentinel = self.sentinel();
        let mut count = 0;
        for i in 0..self.len {
            let from = if self.options.directed { 0 } else { i };
            count += (from..self.len)
                .filter(|&j| self.matrix[i * self.len + j] != sentinel)
                .count();
        }
        count
    }

    /// Textual dump of the matrix, see [`MatrixDisplay`].
    pub fn display_matrix(&self) -> MatrixDisplay<'_> {
        MatrixDisplay::new(self)
    }

    // ==================== Components ====================

    /// The connected-component partition, computed once per clean state.
    ///
    /// Repeated calls without mutation return the same object. Directed
    /// graphs are partitioned into weakly connected components.
    pub fn connected_components(&self) -> &ComponentPartition {
        self.components.get_or_init(|| self.resolve_components())
    }

    /// Whether `u` and `v` share a component. Out of range yields `false`.
    pub fn reachable(&self, u: Vertex, v: Vertex) -> bool {
        if !self.contains(u) || !self.contains(v) {
            return false;
        }
        self.connected_components().same_component(u, v)
    }

    fn resolve_components(&self) -> ComponentPartition {
        let n = self.len;
        let mut ids: Vec<ComponentId> = vec![0; n];
        let mut remaining = n;
        let mut live = 0usize;
        let mut queue: VecDeque<Vertex> = VecDeque::new();

        for i in 0..n {
            if remaining == 0 {
                break;
            }
            if ids[i] != 0 {
                continue;
            }

            let mut class_id = (i + 1) as ComponentId;
            ids[i] = class_id;
            remaining -= 1;
            live += 1;
            queue.push_back(i);

            while let Some(v) = queue.pop_front() {
                for (j, _) in self.neighbors(v) {
                    let current = ids[j];
                    if current == class_id {
                        continue;
                    }

                    if current == 0 {
                        ids[j] = class_id;
                        remaining -= 1;
                        queue.push_back(j);
                        continue;
                    }

                    // j was claimed by an earlier component: fold this one into it
                    let old_id = class_id;
                    class_id = current;
                    for id in ids.iter_mut().filter(|id| **id == old_id) {
                        *id = class_id;
                    }
                    live -= 1;
                }
            }
        }

        log::debug!("resolved {} components over {} vertices", live, n);
        ComponentPartition::from_assignment(ids, live)
    }

    // ==================== Paths ====================

    /// Breadth-first wave from `source`. See [`traversal::generate_wave`].
    pub fn generate_wave(
        &self,
        source: Vertex,
        sink: Option<Vertex>,
        duplicate: bool,
    ) -> Option<WaveTree> {
        traversal::generate_wave(self, source, sink, duplicate)
    }

    /// Every fewest-edges path from `source` to `sink`. See
    /// [`traversal::shortest_paths`].
    pub fn shortest_paths(&self, source: Vertex, sink: Vertex) -> VertexMap<Path> {
        traversal::shortest_paths(self, source, sink)
    }

    /// Lightest paths from `source`, keyed by end vertex. See
    /// [`traversal::minimum_weight_paths`].
    pub fn minimum_weight_paths(&self, source: Vertex, sink: Option<Vertex>) -> VertexMap<Path> {
        traversal::minimum_weight_paths(self, source, sink)
    }

    /// Members of the component containing `vertex`.
    pub fn component_of(&self, vertex: Vertex) -> Option<&VertexSequence> {
        self.connected_components().component_of(vertex)
    }
}

impl Clone for MatrixGraph {
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            len: self.len,
            matrix: self.matrix.clone(),
            components: OnceCell::new(),
        }
    }
}

fn sentinel_for(weighted: bool) -> Weight {
    if weighted {
        NO_EDGE_WEIGHTED
    } else {
        NO_EDGE_UNWEIGHTED
    }
}
