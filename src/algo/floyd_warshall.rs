//! Floyd-Warshall all-pairs shortest paths.

use std::collections::HashMap;

use log::debug;

use crate::graph::{Graph, Vertex};
use crate::types::{Cost, GraphResult, Weight};

/// Shortest-path costs between every pair of vertices.
///
/// The vertex ordering is fixed once at call time. Layer zero holds direct
/// edge weights (zero on the diagonal, infinite otherwise); layer k allows
/// routes through the first k vertices:
/// `cost[i][j] = min(cost[i][j], cost[i][k] + cost[k][j])`, with infinity
/// absorbing so a route never passes through a non-existent partial path.
///
/// Pairs whose final cost is infinite are dropped from the output map
/// entirely; absence means unreachable. Every vertex reaches itself at
/// cost zero, so every vertex has a row.
pub fn floyd_warshall<V, W, G>(graph: &G) -> GraphResult<HashMap<V, HashMap<V, W>>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    let vertices = graph.vertices();
    let n = vertices.len();
    debug!("floyd-warshall over {n} vertices");

    let mut prev: Vec<Vec<Cost<W>>> = vec![vec![Cost::Infinite; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                prev[i][j] = Cost::zero();
            } else if graph.has_edge(&vertices[i], &vertices[j]) {
                prev[i][j] = Cost::Finite(graph.label(&vertices[i], &vertices[j])?);
            }
        }
    }

    let mut cur = prev.clone();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                cur[i][j] = prev[i][j].min(prev[i][k] + prev[k][j]);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    // `prev` holds the final layer after the last swap.
    let mut costs: HashMap<V, HashMap<V, W>> = HashMap::new();
    for (i, u) in vertices.iter().enumerate() {
        for (j, v) in vertices.iter().enumerate() {
            if let Some(w) = prev[i][j].finite() {
                costs
                    .entry(u.clone())
                    .or_default()
                    .insert(v.clone(), w);
            }
        }
    }

    Ok(costs)
}
