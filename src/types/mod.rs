//! Shared data types for the wavegraph library.

pub mod error;
pub mod path;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use path::Path;
pub use vertex::VertexSequence;

/// A vertex identifier in `[0, n)`.
pub type Vertex = usize;

/// An edge weight as stored in the adjacency matrix.
pub type Weight = i32;

/// "No edge" marker in a weighted graph.
pub const NO_EDGE_WEIGHTED: Weight = Weight::MAX;

/// "No edge" marker in an unweighted graph.
pub const NO_EDGE_UNWEIGHTED: Weight = 0;

/// Load factor at which a `VertexMap` grows its bucket table.
pub const DEFAULT_MAX_LOAD_FACTOR: f32 = 1.0;

/// Bucket count a `VertexMap` starts with on its first insert.
pub const INITIAL_BUCKET_COUNT: usize = 16;
