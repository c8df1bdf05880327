//! wavegraph — dense adjacency-matrix graphs with cached connected components
//! and breadth-first wave path search.
//!
//! A [`MatrixGraph`] holds a fixed vertex set and a weight per ordered pair.
//! Components are resolved lazily and kept until the next mutation. Paths are
//! found by growing a [`WaveTree`] from a source vertex, or by label-correcting
//! relaxation for lightest paths. [`VertexMap`] is the integer-keyed map the
//! path and component results are returned in.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{ComponentReport, GraphStats, HopGroup, QueryEngine};
pub use format::{EdgeListReader, MatrixDisplay};
pub use graph::{
    GraphBuilder, GraphOptions, MatrixGraph, WaveDisplay, WaveId, WaveNode, WaveTree,
};
pub use index::{ComponentId, ComponentPartition, Releaser, VertexMap};
pub use types::{
    GraphError, GraphResult, Path, Vertex, VertexSequence, Weight, DEFAULT_MAX_LOAD_FACTOR,
    INITIAL_BUCKET_COUNT, NO_EDGE_UNWEIGHTED, NO_EDGE_WEIGHTED,
};
