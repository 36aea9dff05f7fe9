//! A*-style priority search biased by a per-vertex score.

use log::debug;

use crate::graph::{Graph, Vertex};
use crate::types::{GraphResult, PathOutcome, Weight};

use super::dijkstra::frontier_search;
use super::walk_back;

/// Shortest path from `start` to `end`, expanding high-priority vertices
/// first.
///
/// Identical to [`dijkstra_path`](crate::algo::dijkstra_path) except that
/// the frontier is ordered by the accumulated cost plus half the vertex's
/// `score`, biasing expansion toward low-scoring vertices. The score source
/// is external: any precomputed centrality or popularity map works, e.g. a
/// [`DistanceCache`](crate::algo::DistanceCache) lookup or a closure over a
/// `HashMap`. Relaxation and termination rules are unchanged, so an
/// unreachable `end` is still [`PathOutcome::NotFound`].
pub fn priority_search<V, W, G, S>(
    graph: &G,
    start: &V,
    end: &V,
    score: S,
) -> GraphResult<PathOutcome<V>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
    S: Fn(&V) -> W,
{
    debug!("priority search from {start:?} to {end:?}");
    let output = frontier_search(graph, start, Some(end), score)?;
    if output.target_reached {
        Ok(PathOutcome::Found(walk_back(&output.backtrack, end)))
    } else {
        Ok(PathOutcome::NotFound)
    }
}
