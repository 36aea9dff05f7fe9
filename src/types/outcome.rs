//! Tagged outcome types for algorithm results.
//!
//! An unreachable target, a cyclic graph or a reachable negative cycle is
//! an expected input condition, not a fault. Each gets its own variant in
//! a result type rather than an error.

use std::collections::HashMap;

use serde::Serialize;

/// Result of a point-to-point path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathOutcome<V> {
    /// The path from start to end, inclusive of both endpoints.
    Found(Vec<V>),
    /// No route exists.
    NotFound,
}

impl<V> PathOutcome<V> {
    /// The path, or `None` when no route was found.
    pub fn path(self) -> Option<Vec<V>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NotFound => None,
        }
    }
}

/// Result of topological sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TopoOutcome<V> {
    /// A topological ordering over every vertex of the graph.
    Ordering(Vec<V>),
    /// The graph contains a cycle; no ordering exists.
    Cyclic,
}

/// Per-vertex path classification for single-source-all-paths queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathFrom<V> {
    /// The vertex is the start vertex itself.
    Start,
    /// No route from the start vertex.
    NoPath,
    /// The route from the start vertex, inclusive of both endpoints.
    Path(Vec<V>),
}

/// Result of a Bellman-Ford computation: the payload when shortest paths
/// exist, or the negative-cycle outcome when they do not.
#[derive(Debug, Clone, Serialize)]
pub enum BellmanFordOutcome<T> {
    /// Shortest paths exist; here they are.
    Shortest(T),
    /// A negative-weight cycle is reachable from the start vertex, so no
    /// finite shortest-path costs exist.
    NegativeCycle,
}

/// Costs and predecessors from a single-source shortest-path run.
/// Unreachable vertices are absent from `costs`.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<V, W> {
    /// Minimum path cost per reachable vertex (the start costs zero).
    pub costs: HashMap<V, W>,
    /// Predecessor per reachable vertex; the start maps to `None`.
    pub predecessors: HashMap<V, Option<V>>,
}
