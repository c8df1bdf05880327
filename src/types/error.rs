//! Error types for the wavegraph library.

use std::collections::TryReserveError;

use thiserror::Error;

/// All errors that can occur in the wavegraph library.
///
/// Graph queries themselves never fail on bad vertex indices; those are
/// reported through `false`, sentinel weights or empty collections. This
/// type covers loading, explicit reservations and the CLI surface.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed token in an edge list.
    #[error("Malformed edge list at token {position}: {reason}")]
    Parse { position: usize, reason: String },

    /// Edge list ended before the announced number of edges.
    #[error("Edge list is truncated: expected {expected} edges, found {found}")]
    Truncated { expected: usize, found: usize },

    /// A vertex index outside `[0, len)` where one is required.
    #[error("Vertex {vertex} is out of range for a graph of {len} vertices")]
    VertexOutOfRange { vertex: usize, len: usize },

    /// Storage could not be grown; existing contents are untouched.
    #[error("Allocation failed: {0}")]
    Allocation(String),

    /// Argument rejected by a command.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<TryReserveError> for GraphError {
    fn from(err: TryReserveError) -> Self {
        GraphError::Allocation(err.to_string())
    }
}

/// Convenience result type for wavegraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
