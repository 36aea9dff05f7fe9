//! Adjacency-map implementation of the graph contract.
//!
//! Edge labels live in nested maps, once per direction:
//! `outgoing: { u -> { v -> label } }` and `incoming: { v -> { u -> label } }`.
//! The two maps always hold the same vertex-key set, so degree queries and
//! neighbor enumeration work for isolated vertices too.

use std::collections::HashMap;
use std::fmt;

use crate::types::{GraphError, GraphResult};

use super::{Graph, Vertex};

/// A directed graph backed by two adjacency maps (out-edges and in-edges).
///
/// The edge (u -> v, label) exists iff `outgoing[u][v] == label` and
/// `incoming[v][u] == label`; every mutation maintains both sides.
/// Cloning yields a fully independent copy of the vertex set and all
/// directed edges.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, E> {
    outgoing: HashMap<V, HashMap<V, E>>,
    incoming: HashMap<V, HashMap<V, E>>,
}

impl<V: Vertex, E: Clone> AdjacencyGraph<V, E> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    fn edges_out_of(&self, v: &V) -> GraphResult<&HashMap<V, E>> {
        self.outgoing.get(v).ok_or(GraphError::NoSuchVertex)
    }

    fn edges_into(&self, v: &V) -> GraphResult<&HashMap<V, E>> {
        self.incoming.get(v).ok_or(GraphError::NoSuchVertex)
    }
}

impl<V: Vertex, E: Clone> Default for AdjacencyGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, E: Clone> Graph<V, E> for AdjacencyGraph<V, E> {
    fn num_vertices(&self) -> usize {
        self.outgoing.len()
    }

    fn num_edges(&self) -> usize {
        self.outgoing.values().map(HashMap::len).sum()
    }

    fn vertices(&self) -> Vec<V> {
        self.outgoing.keys().cloned().collect()
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.outgoing.contains_key(v)
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        self.outgoing
            .get(u)
            .is_some_and(|edges| edges.contains_key(v))
    }

    fn label(&self, u: &V, v: &V) -> GraphResult<E> {
        let edges = self.edges_out_of(u)?;
        if !self.outgoing.contains_key(v) {
            return Err(GraphError::NoSuchVertex);
        }
        edges.get(v).cloned().ok_or(GraphError::NoEdge)
    }

    fn out_degree(&self, v: &V) -> GraphResult<usize> {
        Ok(self.edges_out_of(v)?.len())
    }

    fn in_degree(&self, v: &V) -> GraphResult<usize> {
        Ok(self.edges_into(v)?.len())
    }

    fn out_neighbors(&self, v: &V) -> GraphResult<Vec<V>> {
        Ok(self.edges_out_of(v)?.keys().cloned().collect())
    }

    fn in_neighbors(&self, v: &V) -> GraphResult<Vec<V>> {
        Ok(self.edges_into(v)?.keys().cloned().collect())
    }

    fn insert_vertex(&mut self, v: V) {
        if !self.outgoing.contains_key(&v) {
            self.outgoing.insert(v.clone(), HashMap::new());
            self.incoming.insert(v, HashMap::new());
        }
    }

    fn insert_directed(&mut self, u: &V, v: &V, label: E) -> GraphResult<()> {
        if !self.incoming.contains_key(v) {
            return Err(GraphError::NoSuchVertex);
        }
        let out = self.outgoing.get_mut(u).ok_or(GraphError::NoSuchVertex)?;
        out.insert(v.clone(), label.clone());
        if let Some(inc) = self.incoming.get_mut(v) {
            inc.insert(u.clone(), label);
        }
        Ok(())
    }

    fn remove_vertex(&mut self, v: &V) {
        let Some(out_edges) = self.outgoing.remove(v) else {
            return;
        };
        let in_edges = self.incoming.remove(v).unwrap_or_default();

        // u has an edge to v
        for u in in_edges.keys() {
            if let Some(edges) = self.outgoing.get_mut(u) {
                edges.remove(v);
            }
        }
        // w has an edge from v
        for w in out_edges.keys() {
            if let Some(edges) = self.incoming.get_mut(w) {
                edges.remove(v);
            }
        }
    }

    fn remove_directed(&mut self, u: &V, v: &V) {
        if let Some(edges) = self.outgoing.get_mut(u) {
            edges.remove(v);
        }
        if let Some(edges) = self.incoming.get_mut(v) {
            edges.remove(u);
        }
    }
}

impl<V, E> fmt::Display for AdjacencyGraph<V, E>
where
    V: Vertex + fmt::Display,
    E: Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, edges) in &self.outgoing {
            write!(f, "{u} -> {{")?;
            let mut first = true;
            for (v, label) in edges {
                if !first {
                    write!(f, ",")?;
                }
                write!(f, " {v}={label}")?;
                first = false;
            }
            writeln!(f, " }}")?;
        }
        Ok(())
    }
}
