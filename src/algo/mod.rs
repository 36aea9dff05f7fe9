//! Algorithms over the graph contract.
//!
//! Every function takes a [`Graph`] implementation by shared reference and
//! leaves it untouched; topological sort works on a private deep copy made
//! with [`snapshot`].

pub mod astar;
pub mod bellman_ford;
pub mod cache;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod toposort;
pub mod traversal;

pub use astar::priority_search;
pub use bellman_ford::{bellman_ford, bellman_ford_paths};
pub use cache::DistanceCache;
pub use dijkstra::{dijkstra, dijkstra_path};
pub use floyd_warshall::floyd_warshall;
pub use toposort::topo_sort;
pub use traversal::{bfs, bfs_path, dfs};

use std::collections::HashMap;

use crate::graph::{AdjacencyGraph, Graph, Vertex};
use crate::types::GraphResult;

/// Deep-copy any graph into an [`AdjacencyGraph`]: the same vertex set and
/// an independent copy of every directed edge.
///
/// An undirected edge is stored as two directed edges, so both directions
/// are copied here without special handling.
pub fn snapshot<V, E, G>(graph: &G) -> GraphResult<AdjacencyGraph<V, E>>
where
    V: Vertex,
    E: Clone,
    G: Graph<V, E>,
{
    let mut copy = AdjacencyGraph::new();
    for v in graph.vertices() {
        copy.insert_vertex(v);
    }
    for u in graph.vertices() {
        for v in graph.out_neighbors(&u)? {
            let label = graph.label(&u, &v)?;
            copy.insert_directed(&u, &v, label)?;
        }
    }
    Ok(copy)
}

/// Reconstruct the start-to-end path by chasing predecessors back from
/// `end`, then reversing.
pub(crate) fn walk_back<V: Vertex>(backtrack: &HashMap<V, Option<V>>, end: &V) -> Vec<V> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while let Some(Some(prev)) = backtrack.get(current) {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}
