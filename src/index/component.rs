//! Component partition — every vertex mapped to its connected component.

use crate::types::{Vertex, VertexSequence};

use super::VertexMap;

/// Identifier of a connected component. `0` never names a live component.
pub type ComponentId = u32;

/// Result of resolving a graph's connected components.
///
/// Identifiers are stable only within one computation; recomputing after a
/// mutation may hand out different ids for the same grouping.
#[derive(Debug)]
pub struct ComponentPartition {
    /// vertex -> component id.
    ids: Vec<ComponentId>,
    /// component id -> member vertices in ascending order.
    members: VertexMap<VertexSequence>,
}

impl ComponentPartition {
    /// Build the partition from a finished vertex -> id assignment.
    ///
    /// `live` is the number of distinct ids in `ids`; it sizes the member map
    /// so it never grows while being filled.
    pub(crate) fn from_assignment(ids: Vec<ComponentId>, live: usize) -> Self {
        let mut members: VertexMap<VertexSequence> = VertexMap::with_capacity(live);
        for (vertex, &id) in ids.iter().enumerate() {
            match members.get_mut(id as u64) {
                Some(seq) => seq.push(vertex),
                None => {
                    members.insert(id as u64, VertexSequence::single(vertex));
                }
            }
        }
        Self { ids, members }
    }

    /// Number of vertices covered.
    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of distinct components.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the partition covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Component id of `vertex`, or `None` when out of range.
    pub fn id_of(&self, vertex: Vertex) -> Option<ComponentId> {
        self.ids.get(vertex).copied()
    }

    /// The raw vertex -> id array.
    pub fn ids(&self) -> &[ComponentId] {
        &self.ids
    }

    /// Members of the component with the given id.
    pub fn members(&self, id: ComponentId) -> Option<&VertexSequence> {
        self.members.get(id as u64)
    }

    /// Members of the component `vertex` belongs to.
    pub fn component_of(&self, vertex: Vertex) -> Option<&VertexSequence> {
        self.id_of(vertex).and_then(|id| self.members(id))
    }

    /// Whether both vertices are in range and share a component.
    pub fn same_component(&self, a: Vertex, b: Vertex) -> bool {
        match (self.id_of(a), self.id_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Iterate over `(id, members)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &VertexSequence)> + '_ {
        self.members.iter().map(|(id, seq)| (id as ComponentId, seq))
    }
}
