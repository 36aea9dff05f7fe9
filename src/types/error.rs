//! Error types for the graphtrail library.
//!
//! Only structural misuse is an error here. "No path", "graph is cyclic"
//! and "negative cycle" are expected, testable input conditions and are
//! reported through the outcome types in [`crate::types::outcome`].

use thiserror::Error;

/// All errors that can occur in the graphtrail library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a vertex that is not in the graph.
    #[error("vertex is not in the graph")]
    NoSuchVertex,

    /// A label lookup referenced an edge that does not exist.
    #[error("no edge between the given vertices")]
    NoEdge,
}

/// Convenience result type for graphtrail operations.
pub type GraphResult<T> = Result<T, GraphError>;
