//! The graph data structure: the abstract contract and its adjacency-map
//! implementation.

pub mod adjacency;
pub mod contract;

pub use adjacency::AdjacencyGraph;
pub use contract::{Graph, Vertex};
