//! Growable ordered list of vertices, the building block of paths.

use serde::Serialize;

use super::{GraphResult, Vertex};

/// An ordered sequence of vertex identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexSequence {
    data: Vec<Vertex>,
}

impl VertexSequence {
    /// Create an empty sequence without allocating.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty sequence able to hold `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Copy a raw list of vertices into a new sequence.
    pub fn from_slice(vertices: &[Vertex]) -> Self {
        Self {
            data: vertices.to_vec(),
        }
    }

    /// A sequence holding a single vertex.
    pub fn single(vertex: Vertex) -> Self {
        Self { data: vec![vertex] }
    }

    /// Make room for `extra` more vertices. Reserving 0 is a no-op.
    ///
    /// On failure the sequence is left exactly as it was.
    pub fn reserve(&mut self, extra: usize) -> GraphResult<()> {
        if extra == 0 {
            return Ok(());
        }
        self.data.try_reserve(extra)?;
        Ok(())
    }

    /// Reverse the sequence in place, swapping mirrored pairs.
    pub fn reverse_in_place(&mut self) {
        let len = self.data.len();
        for i in 0..len / 2 {
            self.data.swap(i, len - i - 1);
        }
    }

    /// Append a vertex.
    pub fn push(&mut self, vertex: Vertex) {
        self.data.push(vertex);
    }

    /// Append every vertex of `other`.
    pub fn extend_from(&mut self, other: &VertexSequence) {
        self.data.extend_from_slice(&other.data);
    }

    /// Shorten the sequence to `len` vertices.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated room, in vertices.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// First vertex, if any.
    pub fn first(&self) -> Option<Vertex> {
        self.data.first().copied()
    }

    /// Last vertex, if any.
    pub fn last(&self) -> Option<Vertex> {
        self.data.last().copied()
    }

    /// Whether `vertex` appears anywhere in the sequence.
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.data.contains(&vertex)
    }

    /// The vertices as a slice.
    pub fn as_slice(&self) -> &[Vertex] {
        &self.data
    }

    /// Iterate over the vertices in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.data.iter()
    }

    /// Consume the sequence, returning the backing vector.
    pub fn into_vec(self) -> Vec<Vertex> {
        self.data
    }
}

impl From<Vec<Vertex>> for VertexSequence {
    fn from(data: Vec<Vertex>) -> Self {
        Self { data }
    }
}

impl FromIterator<Vertex> for VertexSequence {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a VertexSequence {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl std::ops::Index<usize> for VertexSequence {
    type Output = Vertex;

    fn index(&self, index: usize) -> &Vertex {
        &self.data[index]
    }
}

impl std::fmt::Display for VertexSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, vertex) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}
