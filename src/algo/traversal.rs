//! Breadth-first and depth-first traversal.

use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use crate::graph::{Graph, Vertex};
use crate::types::{GraphError, GraphResult, PathOutcome};

use super::walk_back;

/// Breadth-first search from `start`.
///
/// Returns the predecessor map: every reachable vertex maps to the vertex
/// that first discovered it, in level order; `start` maps to `None`.
/// Unreachable vertices are simply absent. Vertices are marked visited the
/// moment they are enqueued, so each is enqueued at most once.
pub fn bfs<V, E, G>(graph: &G, start: &V) -> GraphResult<HashMap<V, Option<V>>>
where
    V: Vertex,
    E: Clone,
    G: Graph<V, E>,
{
    if !graph.has_vertex(start) {
        return Err(GraphError::NoSuchVertex);
    }
    debug!("breadth-first search from {start:?}");

    let mut backtrack: HashMap<V, Option<V>> = HashMap::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    backtrack.insert(start.clone(), None);
    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(u) = queue.pop_front() {
        for v in graph.out_neighbors(&u)? {
            if visited.insert(v.clone()) {
                backtrack.insert(v.clone(), Some(u.clone()));
                queue.push_back(v);
            }
        }
    }

    Ok(backtrack)
}

/// Breadth-first path from `start` to `end`.
///
/// Stops as soon as `end` is discovered and reconstructs the path by
/// walking predecessors back to `start`. An unreachable `end` is the
/// [`PathOutcome::NotFound`] outcome, not an error.
pub fn bfs_path<V, E, G>(graph: &G, start: &V, end: &V) -> GraphResult<PathOutcome<V>>
where
    V: Vertex,
    E: Clone,
    G: Graph<V, E>,
{
    if !graph.has_vertex(start) || !graph.has_vertex(end) {
        return Err(GraphError::NoSuchVertex);
    }
    debug!("breadth-first pathfinding from {start:?} to {end:?}");

    if start == end {
        return Ok(PathOutcome::Found(vec![start.clone()]));
    }

    let mut backtrack: HashMap<V, Option<V>> = HashMap::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    backtrack.insert(start.clone(), None);
    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(u) = queue.pop_front() {
        for v in graph.out_neighbors(&u)? {
            if visited.insert(v.clone()) {
                backtrack.insert(v.clone(), Some(u.clone()));
                if v == *end {
                    return Ok(PathOutcome::Found(walk_back(&backtrack, end)));
                }
                queue.push_back(v);
            }
        }
    }

    Ok(PathOutcome::NotFound)
}

/// Depth-first search from `start`, with an explicit stack rather than
/// recursion.
///
/// Returns the predecessor map; `start` maps to `None` and unreachable
/// vertices are absent. A vertex is marked visited only when popped, so a
/// vertex with several in-edges may sit on the stack more than once; its
/// recorded predecessor is the last vertex that pushed it before its first
/// pop. This differs from discovery-time assignment and is kept
/// deliberately for output compatibility.
pub fn dfs<V, E, G>(graph: &G, start: &V) -> GraphResult<HashMap<V, Option<V>>>
where
    V: Vertex,
    E: Clone,
    G: Graph<V, E>,
{
    if !graph.has_vertex(start) {
        return Err(GraphError::NoSuchVertex);
    }
    debug!("depth-first search from {start:?}");

    let mut backtrack: HashMap<V, Option<V>> = HashMap::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut stack: Vec<V> = Vec::new();

    backtrack.insert(start.clone(), None);
    stack.push(start.clone());

    while let Some(u) = stack.pop() {
        if visited.insert(u.clone()) {
            for v in graph.out_neighbors(&u)? {
                if !visited.contains(&v) {
                    backtrack.insert(v.clone(), Some(u.clone()));
                    stack.push(v);
                }
            }
        }
    }

    Ok(backtrack)
}
