//! The graph contract every algorithm operates through.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::GraphResult;

/// Capabilities required of vertex types.
///
/// Vertices are compared by value equality; the `Ord` bound lets priority
/// frontiers break cost ties deterministically, and `Debug` feeds the
/// algorithms' progress logging. Blanket-implemented, so any
/// `Eq + Hash + Ord + Clone + Debug` type is a vertex.
pub trait Vertex: Eq + Hash + Ord + Clone + Debug {}

impl<T: Eq + Hash + Ord + Clone + Debug> Vertex for T {}

/// A mutable directed graph with labeled edges.
///
/// An undirected edge is modeled as a pair of directed edges carrying the
/// same label, inserted and removed together. Methods that enumerate
/// vertices or neighbors return owned snapshots, so the graph can be
/// mutated freely between calls without invalidating anything.
///
/// Operations taking vertex arguments fail with
/// [`GraphError::NoSuchVertex`](crate::types::GraphError::NoSuchVertex)
/// when an argument is not a vertex of the graph, unless documented
/// otherwise.
pub trait Graph<V: Vertex, E: Clone> {
    /// Number of vertices.
    fn num_vertices(&self) -> usize;

    /// Number of directed edges. An undirected edge counts as two.
    fn num_edges(&self) -> usize;

    /// Every vertex, as an owned snapshot.
    fn vertices(&self) -> Vec<V>;

    /// Whether `v` is a vertex of the graph.
    fn has_vertex(&self, v: &V) -> bool;

    /// Whether the directed edge u -> v exists. `false` when either vertex
    /// is absent.
    fn has_edge(&self, u: &V, v: &V) -> bool;

    /// Label of the directed edge u -> v.
    ///
    /// Fails with [`GraphError::NoEdge`](crate::types::GraphError::NoEdge)
    /// when both vertices exist but the edge does not.
    fn label(&self, u: &V, v: &V) -> GraphResult<E>;

    /// Number of edges leaving `v`.
    fn out_degree(&self, v: &V) -> GraphResult<usize>;

    /// Number of edges entering `v`.
    fn in_degree(&self, v: &V) -> GraphResult<usize>;

    /// Whether `v` has at least one outgoing edge.
    fn has_out(&self, v: &V) -> GraphResult<bool> {
        Ok(self.out_degree(v)? > 0)
    }

    /// Whether `v` has at least one incoming edge.
    fn has_in(&self, v: &V) -> GraphResult<bool> {
        Ok(self.in_degree(v)? > 0)
    }

    /// Vertices one edge away from `v`, as an owned snapshot.
    fn out_neighbors(&self, v: &V) -> GraphResult<Vec<V>>;

    /// Vertices with an edge into `v`, as an owned snapshot.
    fn in_neighbors(&self, v: &V) -> GraphResult<Vec<V>>;

    /// Insert a vertex. Idempotent: inserting a present vertex is a no-op.
    fn insert_vertex(&mut self, v: V);

    /// Insert the directed edge u -> v, overwriting any existing label.
    fn insert_directed(&mut self, u: &V, v: &V, label: E) -> GraphResult<()>;

    /// Insert an undirected edge: the two directed edges u -> v and v -> u
    /// with the same label. Each direction stays independently queryable
    /// and removable.
    fn insert_undirected(&mut self, u: &V, v: &V, label: E) -> GraphResult<()> {
        self.insert_directed(u, v, label.clone())?;
        self.insert_directed(v, u, label)
    }

    /// Remove `v` and every edge incident to it, in either direction.
    /// No-op if `v` is absent.
    fn remove_vertex(&mut self, v: &V);

    /// Remove the directed edge u -> v if present; no-op otherwise.
    fn remove_directed(&mut self, u: &V, v: &V);

    /// Remove both directions of an undirected edge if present.
    fn remove_undirected(&mut self, u: &V, v: &V) {
        self.remove_directed(u, v);
        self.remove_directed(v, u);
    }
}
