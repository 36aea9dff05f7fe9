//! Dijkstra's single-source shortest paths, for non-negative weights.
//!
//! The shared frontier loop here also powers the A*-style search in
//! [`crate::algo::astar`]; the only difference is the heuristic term mixed
//! into the frontier key.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::graph::{Graph, Vertex};
use crate::types::{Cost, GraphError, GraphResult, PathOutcome, Weight};

use super::walk_back;

/// What a frontier run leaves behind.
pub(crate) struct SearchOutput<V, W> {
    /// Best known cost per vertex; `Infinite` means unreachable.
    pub costs: HashMap<V, Cost<W>>,
    /// Predecessor map over relaxations; the start maps to `None`.
    pub backtrack: HashMap<V, Option<V>>,
    /// Whether the target was extracted with a finite cost.
    pub target_reached: bool,
}

/// Min-priority frontier loop shared by `dijkstra`, `dijkstra_path` and
/// `priority_search`.
///
/// Every vertex is seeded into the frontier (the start at zero, the rest
/// infinite). Decrease-key is a reinsert: stale entries are recognized and
/// skipped on extraction because their recorded cost no longer matches the
/// vertex's best. A vertex extracted with an infinite cost is unreachable
/// and is never relaxed from, so unreachable components cannot pollute
/// downstream costs. The frontier key is the accumulated cost plus the
/// halved heuristic score; relaxation itself always compares raw costs.
pub(crate) fn frontier_search<V, W, G, H>(
    graph: &G,
    start: &V,
    target: Option<&V>,
    heuristic: H,
) -> GraphResult<SearchOutput<V, W>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
    H: Fn(&V) -> W,
{
    if !graph.has_vertex(start) {
        return Err(GraphError::NoSuchVertex);
    }
    if let Some(end) = target {
        if !graph.has_vertex(end) {
            return Err(GraphError::NoSuchVertex);
        }
    }

    let mut costs: HashMap<V, Cost<W>> = HashMap::new();
    let mut backtrack: HashMap<V, Option<V>> = HashMap::new();
    let mut settled: HashSet<V> = HashSet::new();
    // Min-heap ordered by (key, vertex); the vertex breaks cost ties
    // deterministically.
    let mut frontier: BinaryHeap<Reverse<(Cost<W>, Cost<W>, V)>> = BinaryHeap::new();

    backtrack.insert(start.clone(), None);
    for v in graph.vertices() {
        let cost = if v == *start {
            Cost::zero()
        } else {
            Cost::Infinite
        };
        costs.insert(v.clone(), cost);
        let key = cost.plus(heuristic(&v).halve());
        frontier.push(Reverse((key, cost, v)));
    }

    let mut target_reached = false;

    while let Some(Reverse((_, cost, u))) = frontier.pop() {
        if settled.contains(&u) {
            continue;
        }
        // A reinserted vertex leaves its old entry behind; skip it.
        if costs.get(&u).copied().unwrap_or(Cost::Infinite) != cost {
            continue;
        }
        settled.insert(u.clone());

        let base = match cost.finite() {
            Some(base) => base,
            None => {
                // Everything still unextracted is unreachable too.
                if target.is_some() {
                    break;
                }
                continue;
            }
        };

        if let Some(end) = target {
            if u == *end {
                target_reached = true;
                break;
            }
        }

        for v in graph.out_neighbors(&u)? {
            if settled.contains(&v) {
                continue;
            }
            let weight = graph.label(&u, &v)?;
            let candidate = Cost::Finite(base + weight);
            if candidate < costs.get(&v).copied().unwrap_or(Cost::Infinite) {
                trace!("relaxed {v:?} to {candidate:?} via {u:?}");
                costs.insert(v.clone(), candidate);
                backtrack.insert(v.clone(), Some(u.clone()));
                let key = candidate.plus(heuristic(&v).halve());
                frontier.push(Reverse((key, candidate, v)));
            }
        }
    }

    Ok(SearchOutput {
        costs,
        backtrack,
        target_reached,
    })
}

/// Shortest-path cost from `start` to every reachable vertex.
///
/// All edge weights must be non-negative; results are undefined otherwise
/// (use [`bellman_ford`](crate::algo::bellman_ford) for negative weights).
/// The returned map holds finite costs only: a vertex absent from it is
/// unreachable. The start always costs zero.
pub fn dijkstra<V, W, G>(graph: &G, start: &V) -> GraphResult<HashMap<V, W>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    debug!("dijkstra costs from {start:?}");
    let output = frontier_search(graph, start, None, |_| W::zero())?;
    Ok(output
        .costs
        .into_iter()
        .filter_map(|(v, cost)| cost.finite().map(|w| (v, w)))
        .collect())
}

/// Shortest path from `start` to `end` under non-negative weights.
///
/// Terminates as soon as `end` is extracted from the frontier. An
/// unreachable `end` is the [`PathOutcome::NotFound`] outcome.
pub fn dijkstra_path<V, W, G>(graph: &G, start: &V, end: &V) -> GraphResult<PathOutcome<V>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    debug!("dijkstra pathfinding from {start:?} to {end:?}");
    let output = frontier_search(graph, start, Some(end), |_| W::zero())?;
    if output.target_reached {
        Ok(PathOutcome::Found(walk_back(&output.backtrack, end)))
    } else {
        Ok(PathOutcome::NotFound)
    }
}
