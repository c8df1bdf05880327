//! Index structures for sparse vertex -> data lookup.

pub mod component;
pub mod vertex_map;

pub use component::{ComponentId, ComponentPartition};
pub use vertex_map::{Releaser, VertexMap};
