//! graphtrail — a generic in-memory graph with classical traversal and
//! shortest-path algorithms.
//!
//! The [`Graph`] trait defines the mutation/query contract, implemented by
//! the adjacency-map [`AdjacencyGraph`]. The [`algo`] module holds the
//! algorithms that consume any implementation read-only: breadth- and
//! depth-first search, Kahn's topological sort, Dijkstra, Bellman-Ford,
//! Floyd-Warshall and an A*-style priority search. Unreachable targets,
//! cyclic graphs and negative cycles are reported as tagged outcomes, not
//! errors.

pub mod algo;
pub mod graph;
pub mod types;

// Re-export commonly used items at the crate root
pub use algo::{
    bellman_ford, bellman_ford_paths, bfs, bfs_path, dfs, dijkstra, dijkstra_path,
    floyd_warshall, priority_search, snapshot, topo_sort, DistanceCache,
};
pub use graph::{AdjacencyGraph, Graph, Vertex};
pub use types::{
    BellmanFordOutcome, Cost, GraphError, GraphResult, PathFrom, PathOutcome, ShortestPaths,
    TopoOutcome, Weight,
};
