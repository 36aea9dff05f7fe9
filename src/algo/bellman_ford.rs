//! Bellman-Ford single-source shortest paths, negative weights allowed.

use std::collections::HashMap;

use log::{debug, trace};

use crate::graph::{Graph, Vertex};
use crate::types::{
    BellmanFordOutcome, Cost, GraphError, GraphResult, PathFrom, ShortestPaths, Weight,
};

use super::walk_back;

/// One relaxation round: try every directed edge (u -> v) against the
/// previous row, improving the current row in place. Returns whether any
/// cost improved.
fn relax_round<V, W, G>(
    graph: &G,
    vertices: &[V],
    prev: &HashMap<V, Cost<W>>,
    cur: &mut HashMap<V, Cost<W>>,
    mut predecessors: Option<&mut HashMap<V, Option<V>>>,
) -> GraphResult<bool>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    let mut improved = false;
    for u in vertices {
        // Only finite sources relax; infinity never extends a path.
        let base = match prev.get(u).copied().unwrap_or(Cost::Infinite).finite() {
            Some(base) => base,
            None => continue,
        };
        for v in graph.out_neighbors(u)? {
            let weight = graph.label(u, &v)?;
            let candidate = Cost::Finite(base + weight);
            if candidate < cur.get(&v).copied().unwrap_or(Cost::Infinite) {
                trace!("improved {v:?} to {candidate:?} via {u:?}");
                cur.insert(v.clone(), candidate);
                if let Some(preds) = predecessors.as_mut() {
                    preds.insert(v.clone(), Some(u.clone()));
                }
                improved = true;
            }
        }
    }
    Ok(improved)
}

/// Shortest-path costs from `start`, tolerating negative edge weights.
///
/// Dynamic programming over at most n-1 rounds: each round copies the
/// previous row, then relaxes every directed edge whose source cost is
/// finite. One extra round afterwards detects negative cycles: if any cost
/// can still improve, a negative-weight cycle is reachable from `start`
/// and the result is [`BellmanFordOutcome::NegativeCycle`] instead of
/// costs that only look authoritative.
pub fn bellman_ford<V, W, G>(
    graph: &G,
    start: &V,
) -> GraphResult<BellmanFordOutcome<ShortestPaths<V, W>>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    if !graph.has_vertex(start) {
        return Err(GraphError::NoSuchVertex);
    }
    debug!("bellman-ford costs from {start:?}");

    let vertices = graph.vertices();
    let n = vertices.len();

    let mut prev: HashMap<V, Cost<W>> = vertices
        .iter()
        .map(|v| {
            let cost = if v == start {
                Cost::zero()
            } else {
                Cost::Infinite
            };
            (v.clone(), cost)
        })
        .collect();
    let mut predecessors: HashMap<V, Option<V>> = HashMap::new();
    predecessors.insert(start.clone(), None);

    for _ in 1..n {
        let mut cur = prev.clone();
        relax_round(graph, &vertices, &prev, &mut cur, Some(&mut predecessors))?;
        prev = cur;
    }

    // Detection pass: a round that can still improve proves a reachable
    // negative cycle.
    let mut probe = prev.clone();
    if relax_round(graph, &vertices, &prev, &mut probe, None)? {
        debug!("costs still improving after {n} rounds; negative cycle");
        return Ok(BellmanFordOutcome::NegativeCycle);
    }

    let costs = prev
        .into_iter()
        .filter_map(|(v, cost)| cost.finite().map(|w| (v, w)))
        .collect();
    Ok(BellmanFordOutcome::Shortest(ShortestPaths {
        costs,
        predecessors,
    }))
}

/// Shortest path from `start` to every vertex, tolerating negative
/// weights.
///
/// Each vertex is classified as [`PathFrom::Start`] (the start itself),
/// [`PathFrom::NoPath`] (unreachable), or [`PathFrom::Path`] with the full
/// vertex sequence from `start`.
pub fn bellman_ford_paths<V, W, G>(
    graph: &G,
    start: &V,
) -> GraphResult<BellmanFordOutcome<HashMap<V, PathFrom<V>>>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    let table = match bellman_ford(graph, start)? {
        BellmanFordOutcome::Shortest(table) => table,
        BellmanFordOutcome::NegativeCycle => return Ok(BellmanFordOutcome::NegativeCycle),
    };

    let mut paths: HashMap<V, PathFrom<V>> = HashMap::new();
    for v in graph.vertices() {
        let entry = if v == *start {
            PathFrom::Start
        } else if table.costs.contains_key(&v) {
            PathFrom::Path(walk_back(&table.predecessors, &v))
        } else {
            PathFrom::NoPath
        };
        paths.insert(v, entry);
    }
    Ok(BellmanFordOutcome::Shortest(paths))
}
