//! Path — a vertex sequence plus the weight accumulated along it.

use serde::Serialize;

use super::{Vertex, VertexSequence};

/// A walk through the graph and its total weight.
///
/// For wave-derived paths the weight is the number of edges; for
/// minimum-weight paths it is the sum of the traversed edge weights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Path {
    /// Vertices in traversal order.
    pub vertices: VertexSequence,
    /// Accumulated weight.
    pub weight: i64,
}

impl Path {
    pub fn new(vertices: VertexSequence, weight: i64) -> Self {
        Self { vertices, weight }
    }

    /// The trivial path that starts and ends at `vertex`.
    pub fn single(vertex: Vertex) -> Self {
        Self {
            vertices: VertexSequence::single(vertex),
            weight: 0,
        }
    }

    /// First vertex of the path.
    pub fn start(&self) -> Option<Vertex> {
        self.vertices.first()
    }

    /// Last vertex of the path.
    pub fn end(&self) -> Option<Vertex> {
        self.vertices.last()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// A copy of this path continued by one edge of weight `weight` to `vertex`.
    pub fn extended(&self, vertex: Vertex, weight: i64) -> Path {
        let mut vertices = VertexSequence::with_capacity(self.vertices.len() + 1);
        vertices.extend_from(&self.vertices);
        vertices.push(vertex);
        Path {
            vertices,
            weight: self.weight + weight,
        }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.vertices, self.weight)
    }
}
