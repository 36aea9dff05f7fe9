//! Kahn's topological sorting algorithm.

use log::debug;

use crate::graph::{Graph, Vertex};
use crate::types::{GraphResult, TopoOutcome};

use super::snapshot;

/// Topologically sort a graph.
///
/// Works on a private deep copy, so the caller's graph is never mutated.
/// Each round collects every vertex whose in-degree is zero, appends them
/// to the ordering, and only then removes them all from the working copy,
/// so the in-degrees consulted within a round are consistent. A round that
/// removes nothing while vertices remain means every remaining vertex has
/// a dependency: the graph is cyclic, reported as
/// [`TopoOutcome::Cyclic`] rather than an error.
pub fn topo_sort<V, E, G>(graph: &G) -> GraphResult<TopoOutcome<V>>
where
    V: Vertex,
    E: Clone,
    G: Graph<V, E>,
{
    debug!("topological sort over {} vertices", graph.num_vertices());

    let mut copy = snapshot(graph)?;
    let mut ordering: Vec<V> = Vec::with_capacity(copy.num_vertices());

    while copy.num_vertices() > 0 {
        let mut removable: Vec<V> = Vec::new();
        for v in copy.vertices() {
            if copy.in_degree(&v)? == 0 {
                removable.push(v);
            }
        }

        if removable.is_empty() {
            debug!("no vertex without dependencies remains; graph is cyclic");
            return Ok(TopoOutcome::Cyclic);
        }

        // Removal happens only after the full scan of the round.
        for v in removable {
            copy.remove_vertex(&v);
            ordering.push(v);
        }
    }

    Ok(TopoOutcome::Ordering(ordering))
}
