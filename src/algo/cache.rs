//! Explicit all-pairs distance cache.

use std::collections::HashMap;

use log::debug;

use crate::graph::{Graph, Vertex};
use crate::types::{GraphResult, Weight};

use super::floyd_warshall;

/// A caller-owned memo of all-pairs shortest-path costs.
///
/// The table is fingerprinted by the vertex count it was computed from and
/// rebuilt (via [`floyd_warshall`]) on the first lookup after the count
/// changes. Edge-only mutations do not change the fingerprint; callers that
/// relabel or remove edges without touching the vertex set should call
/// [`DistanceCache::invalidate`].
#[derive(Debug, Clone)]
pub struct DistanceCache<V, W> {
    table: Option<HashMap<V, HashMap<V, W>>>,
    indexed_vertices: usize,
}

impl<V: Vertex, W: Weight> DistanceCache<V, W> {
    /// Create an empty cache; the first lookup computes the table.
    pub fn new() -> Self {
        Self {
            table: None,
            indexed_vertices: 0,
        }
    }

    /// Shortest-path cost from `u` to `v`, or `None` when unreachable.
    pub fn distance<G>(&mut self, graph: &G, u: &V, v: &V) -> GraphResult<Option<W>>
    where
        G: Graph<V, W>,
    {
        if self.table.is_none() || self.indexed_vertices != graph.num_vertices() {
            debug!(
                "rebuilding distance table for {} vertices",
                graph.num_vertices()
            );
            self.table = Some(floyd_warshall(graph)?);
            self.indexed_vertices = graph.num_vertices();
        }
        Ok(self
            .table
            .as_ref()
            .and_then(|table| table.get(u))
            .and_then(|row| row.get(v))
            .copied())
    }

    /// Drop the memo; the next lookup recomputes it.
    pub fn invalidate(&mut self) {
        self.table = None;
    }
}

impl<V: Vertex, W: Weight> Default for DistanceCache<V, W> {
    fn default() -> Self {
        Self::new()
    }
}
