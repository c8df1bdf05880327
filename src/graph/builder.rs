//! Fluent API for building MatrixGraph instances.

use crate::types::{Vertex, Weight};

use super::{GraphOptions, MatrixGraph};

/// Fluent builder for constructing a MatrixGraph.
pub struct GraphBuilder {
    len: usize,
    options: GraphOptions,
    edges: Vec<(Vertex, Vertex, Weight)>,
}

impl GraphBuilder {
    /// Create a new builder for `len` vertices: undirected and weighted.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            options: GraphOptions::default(),
            edges: Vec::new(),
        }
    }

    /// Create a new builder with explicit options.
    pub fn with_options(len: usize, options: GraphOptions) -> Self {
        Self {
            len,
            options,
            edges: Vec::new(),
        }
    }

    /// Make edges one-way.
    pub fn directed(mut self, directed: bool) -> Self {
        self.options.directed = directed;
        self
    }

    /// Store weights, or collapse them to 1.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.options.weighted = weighted;
        self
    }

    /// Add an edge of weight 1.
    pub fn edge(&mut self, i: Vertex, j: Vertex) -> &mut Self {
        self.edges.push((i, j, 1));
        self
    }

    /// Add a weighted edge.
    pub fn link(&mut self, i: Vertex, j: Vertex, weight: Weight) -> &mut Self {
        self.edges.push((i, j, weight));
        self
    }

    /// Add every `(i, j, weight)` triple.
    pub fn links(&mut self, edges: &[(Vertex, Vertex, Weight)]) -> &mut Self {
        self.edges.extend_from_slice(edges);
        self
    }

    /// Build the final MatrixGraph. Edges touching out-of-range vertices are
    /// dropped, later edges overwrite earlier ones.
    pub fn build(self) -> MatrixGraph {
        let mut graph = MatrixGraph::with_options(self.options, self.len);
        for (i, j, weight) in self.edges {
            graph.add_weighted_edge(i, j, weight);
        }
        graph
    }
}
