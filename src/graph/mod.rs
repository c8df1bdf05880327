//! In-memory graph operations — the core data structure and its algorithms.

pub mod builder;
pub mod matrix_graph;
pub mod traversal;
pub mod wave;

pub use builder::GraphBuilder;
pub use matrix_graph::{GraphOptions, MatrixGraph};
pub use traversal::{generate_wave, minimum_weight_paths, shortest_paths};
pub use wave::{WaveDisplay, WaveId, WaveNode, WaveTree};
