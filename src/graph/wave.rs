//! Wave tree — the breadth-first exploration tree rooted at a source vertex.
//!
//! Nodes live in an arena owned by the tree and refer to each other by
//! [`WaveId`]. The root is always [`WaveId::ROOT`] at depth 0.

use std::fmt;

use crate::index::VertexMap;
use crate::types::{Path, Vertex, VertexSequence};

/// Handle to a node inside a [`WaveTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaveId(usize);

impl WaveId {
    /// The root node of every tree.
    pub const ROOT: WaveId = WaveId(0);

    /// Position in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the wave: a vertex reached by a specific chain of edges.
#[derive(Debug, Clone)]
pub struct WaveNode {
    /// Parent node, `None` for the root.
    pub parent: Option<WaveId>,
    /// Edges between the root and this node.
    pub depth: usize,
    /// The vertex this node stands for.
    pub vertex: Vertex,
    /// Children in discovery order.
    pub subwaves: Vec<WaveId>,
}

/// Arena-backed tree produced by wave generation.
#[derive(Debug, Clone)]
pub struct WaveTree {
    nodes: Vec<WaveNode>,
}

impl WaveTree {
    /// A tree holding only the root for `source`.
    pub fn new(source: Vertex) -> Self {
        Self {
            nodes: vec![WaveNode {
                parent: None,
                depth: 0,
                vertex: source,
                subwaves: Vec::new(),
            }],
        }
    }

    /// The root handle.
    pub fn root(&self) -> WaveId {
        WaveId::ROOT
    }

    /// The vertex the tree was grown from.
    pub fn source(&self) -> Vertex {
        self.nodes[0].vertex
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Look up a node.
    pub fn node(&self, id: WaveId) -> Option<&WaveNode> {
        self.nodes.get(id.0)
    }

    /// Vertex of a node. Panics on a handle from another tree.
    pub fn vertex(&self, id: WaveId) -> Vertex {
        self.nodes[id.0].vertex
    }

    /// Depth of a node. Panics on a handle from another tree.
    pub fn depth(&self, id: WaveId) -> usize {
        self.nodes[id.0].depth
    }

    /// Children of a node, in discovery order.
    pub fn subwaves(&self, id: WaveId) -> &[WaveId] {
        self.nodes
            .get(id.0)
            .map(|n| n.subwaves.as_slice())
            .unwrap_or(&[])
    }

    /// The child of `parent` that stands for `vertex`, if any.
    pub fn child(&self, parent: WaveId, vertex: Vertex) -> Option<WaveId> {
        self.subwaves(parent)
            .iter()
            .copied()
            .find(|&c| self.nodes[c.0].vertex == vertex)
    }

    /// Attach `vertex` under `parent`.
    ///
    /// A vertex appears at most once among the children of one node, so
    /// adding it again returns the existing child.
    pub fn add(&mut self, parent: WaveId, vertex: Vertex) -> WaveId {
        if let Some(existing) = self.child(parent, vertex) {
            return existing;
        }

        let id = WaveId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(WaveNode {
            parent: Some(parent),
            depth,
            vertex,
            subwaves: Vec::new(),
        });
        self.nodes[parent.0].subwaves.push(id);
        id
    }

    /// Iterate over every node handle in arena order (breadth-first
    /// discovery order).
    pub fn ids(&self) -> impl Iterator<Item = WaveId> {
        (0..self.nodes.len()).map(WaveId)
    }

    /// Handles of all nodes at `depth`.
    pub fn at_depth(&self, depth: usize) -> Vec<WaveId> {
        self.ids().filter(|&id| self.depth(id) == depth).collect()
    }

    /// Deepest level reached.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Vertices from the root down to `id`, following parent handles.
    pub fn trace(&self, id: WaveId) -> VertexSequence {
        let mut seq = VertexSequence::with_capacity(self.depth(id) + 1);
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current.0];
            seq.push(node.vertex);
            cursor = node.parent;
        }
        seq.reverse_in_place();
        seq
    }

    /// Flatten the tree into one path per non-root node.
    ///
    /// Paths are keyed 1.. in depth-first pre-order; the single-vertex root
    /// path is not included. Each path's weight is its edge count, and no
    /// path borrows from the tree.
    pub fn to_paths(&self) -> VertexMap<Path> {
        let mut paths = VertexMap::with_capacity(self.nodes.len());
        let mut next_key: u64 = 0;

        let mut stack: Vec<WaveId> = vec![WaveId::ROOT];
        let mut model = VertexSequence::with_capacity(self.max_depth() + 1);

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];

            model.truncate(node.depth);
            model.push(node.vertex);

            if node.depth > 0 {
                paths.insert(next_key, Path::new(model.clone(), node.depth as i64));
            }
            next_key += 1;

            stack.extend(node.subwaves.iter().rev());
        }

        paths
    }

    /// Pre-order listing with `offset` added to every vertex, see
    /// [`WaveDisplay`].
    pub fn display_offset(&self, offset: usize) -> WaveDisplay<'_> {
        WaveDisplay { tree: self, offset }
    }
}

impl fmt::Display for WaveTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_offset(0).fmt(f)
    }
}

/// Displays a wave tree in pre-order, one node per line indented by its
/// depth, with a fixed offset added to every vertex.
pub struct WaveDisplay<'a> {
    tree: &'a WaveTree,
    offset: usize,
}

impl fmt::Display for WaveDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![WaveId::ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.tree.nodes[id.0];
            writeln!(
                f,
                "{:indent$}{}",
                "",
                node.vertex + self.offset,
                indent = node.depth
            )?;
            stack.extend(node.subwaves.iter().rev());
        }
        Ok(())
    }
}
