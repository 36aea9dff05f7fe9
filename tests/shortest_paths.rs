//! Shortest-path tests: Dijkstra, Bellman-Ford, Floyd-Warshall, the
//! priority search and the distance cache.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graphtrail::graph::{AdjacencyGraph, Graph};
use graphtrail::types::{BellmanFordOutcome, GraphError, PathFrom, PathOutcome};
use graphtrail::{
    bellman_ford, bellman_ford_paths, dijkstra, dijkstra_path, floyd_warshall, priority_search,
    DistanceCache,
};

fn weighted(
    vertices: &[&'static str],
    edges: &[(&'static str, &'static str, i64)],
) -> AdjacencyGraph<&'static str, i64> {
    let mut graph = AdjacencyGraph::new();
    for v in vertices {
        graph.insert_vertex(*v);
    }
    for (u, v, w) in edges {
        graph.insert_directed(u, v, *w).unwrap();
    }
    graph
}

/// A->B(1), B->C(2), A->C(5), D isolated.
fn diamond() -> AdjacencyGraph<&'static str, i64> {
    weighted(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("B", "C", 2), ("A", "C", 5)],
    )
}

// ==================== Dijkstra Tests ====================

#[test]
fn test_dijkstra_costs() {
    let costs = dijkstra(&diamond(), &"A").unwrap();
    let expected: HashMap<&str, i64> = [("A", 0), ("B", 1), ("C", 3)].into_iter().collect();
    assert_eq!(costs, expected);
}

#[test]
fn test_dijkstra_start_costs_zero() {
    let costs = dijkstra(&diamond(), &"C").unwrap();
    assert_eq!(costs[&"C"], 0);
}

#[test]
fn test_dijkstra_unreachable_vertex_absent() {
    let costs = dijkstra(&diamond(), &"A").unwrap();
    assert!(!costs.contains_key(&"D"));
}

#[test]
fn test_dijkstra_path_takes_cheaper_route() {
    assert_eq!(
        dijkstra_path(&diamond(), &"A", &"C").unwrap(),
        PathOutcome::Found(vec!["A", "B", "C"])
    );
}

#[test]
fn test_dijkstra_path_not_found() {
    assert_eq!(
        dijkstra_path(&diamond(), &"A", &"D").unwrap(),
        PathOutcome::NotFound
    );
}

#[test]
fn test_dijkstra_path_to_self() {
    assert_eq!(
        dijkstra_path(&diamond(), &"A", &"A").unwrap(),
        PathOutcome::Found(vec!["A"])
    );
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let graph = weighted(&["A", "B", "C"], &[("A", "B", 0), ("B", "C", 0)]);
    let costs = dijkstra(&graph, &"A").unwrap();
    assert_eq!(costs[&"B"], 0);
    assert_eq!(costs[&"C"], 0);
}

#[test]
fn test_dijkstra_missing_vertex_is_an_error() {
    let graph = diamond();
    assert_eq!(dijkstra(&graph, &"Z").unwrap_err(), GraphError::NoSuchVertex);
    assert_eq!(
        dijkstra_path(&graph, &"A", &"Z").unwrap_err(),
        GraphError::NoSuchVertex
    );
}

// ==================== Bellman-Ford Tests ====================

fn shortest_costs(
    outcome: BellmanFordOutcome<graphtrail::ShortestPaths<&'static str, i64>>,
) -> HashMap<&'static str, i64> {
    match outcome {
        BellmanFordOutcome::Shortest(table) => table.costs,
        BellmanFordOutcome::NegativeCycle => panic!("unexpected negative cycle"),
    }
}

#[test]
fn test_bellman_ford_matches_dijkstra_on_nonnegative() {
    let graph = diamond();
    let bf = shortest_costs(bellman_ford(&graph, &"A").unwrap());
    let dj = dijkstra(&graph, &"A").unwrap();
    assert_eq!(bf, dj);
}

#[test]
fn test_bellman_ford_negative_edge() {
    let graph = weighted(
        &["A", "B", "C"],
        &[("A", "B", 4), ("A", "C", 2), ("B", "C", -3)],
    );
    let costs = shortest_costs(bellman_ford(&graph, &"A").unwrap());
    assert_eq!(costs[&"A"], 0);
    assert_eq!(costs[&"B"], 4);
    assert_eq!(costs[&"C"], 1);
}

#[test]
fn test_bellman_ford_detects_reachable_negative_cycle() {
    let graph = weighted(
        &["A", "B", "C"],
        &[("A", "B", 1), ("B", "C", -2), ("C", "A", -2)],
    );
    assert!(matches!(
        bellman_ford(&graph, &"A").unwrap(),
        BellmanFordOutcome::NegativeCycle
    ));
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    let graph = weighted(
        &["S", "T", "A", "B"],
        &[("S", "T", 1), ("A", "B", -1), ("B", "A", -1)],
    );
    let costs = shortest_costs(bellman_ford(&graph, &"S").unwrap());
    assert_eq!(costs[&"T"], 1);
    assert!(!costs.contains_key(&"A"));
}

#[test]
fn test_bellman_ford_paths_classification() {
    let graph = diamond();
    let paths = match bellman_ford_paths(&graph, &"A").unwrap() {
        BellmanFordOutcome::Shortest(paths) => paths,
        BellmanFordOutcome::NegativeCycle => panic!("unexpected negative cycle"),
    };
    assert_eq!(paths[&"A"], PathFrom::Start);
    assert_eq!(paths[&"D"], PathFrom::NoPath);
    assert_eq!(paths[&"C"], PathFrom::Path(vec!["A", "B", "C"]));
}

// ==================== Floyd-Warshall Tests ====================

#[test]
fn test_floyd_warshall_drops_unreachable_pairs() {
    let table = floyd_warshall(&diamond()).unwrap();
    assert!(!table[&"A"].contains_key(&"D"));
    assert!(!table[&"D"].contains_key(&"A"));
    assert_eq!(table[&"D"][&"D"], 0);
}

#[test]
fn test_floyd_warshall_diagonal_is_zero() {
    let table = floyd_warshall(&diamond()).unwrap();
    for v in ["A", "B", "C", "D"] {
        assert_eq!(table[&v][&v], 0);
    }
}

#[test]
fn test_floyd_warshall_matches_dijkstra_everywhere() {
    let graph = weighted(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 1),
            ("B", "C", 2),
            ("A", "C", 5),
            ("C", "D", 2),
            ("D", "A", 1),
            ("B", "E", 9),
        ],
    );
    let table = floyd_warshall(&graph).unwrap();
    for start in graph.vertices() {
        let costs = dijkstra(&graph, &start).unwrap();
        assert_eq!(table[&start], costs, "row mismatch for start {start}");
    }
}

// ==================== Randomized Cross-Check ====================

fn random_graph(rng: &mut StdRng, n: u32, edges: usize) -> AdjacencyGraph<u32, i64> {
    let mut graph = AdjacencyGraph::new();
    for i in 0..n {
        graph.insert_vertex(i);
    }
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.insert_directed(&u, &v, rng.gen_range(1..10)).unwrap();
        }
    }
    graph
}

#[test]
fn test_random_nonnegative_graphs_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let graph = random_graph(&mut rng, 8, 20);
        let table = floyd_warshall(&graph).unwrap();
        for start in graph.vertices() {
            let dj = dijkstra(&graph, &start).unwrap();
            let bf = match bellman_ford(&graph, &start).unwrap() {
                BellmanFordOutcome::Shortest(t) => t.costs,
                BellmanFordOutcome::NegativeCycle => {
                    panic!("negative cycle in non-negative graph")
                }
            };
            assert_eq!(dj, bf, "dijkstra vs bellman-ford from {start}");
            assert_eq!(table[&start], dj, "floyd-warshall row vs dijkstra from {start}");
        }
    }
}

// ==================== Priority Search Tests ====================

#[test]
fn test_priority_search_zero_score_matches_dijkstra() {
    let graph = diamond();
    assert_eq!(
        priority_search(&graph, &"A", &"C", |_| 0).unwrap(),
        dijkstra_path(&graph, &"A", &"C").unwrap()
    );
}

#[test]
fn test_priority_search_with_score_map() {
    let graph = diamond();
    let mut scores: HashMap<&str, i64> = HashMap::new();
    for v in graph.vertices() {
        let degree = graph.in_degree(&v).unwrap() + graph.out_degree(&v).unwrap();
        scores.insert(v, degree as i64);
    }
    // single route once B is settled; bias changes order, not the answer
    let outcome = priority_search(&graph, &"A", &"C", |v| {
        scores.get(v).copied().unwrap_or(0)
    })
    .unwrap();
    assert!(matches!(outcome, PathOutcome::Found(ref path) if path.last() == Some(&"C")));
}

#[test]
fn test_priority_search_not_found() {
    assert_eq!(
        priority_search(&diamond(), &"A", &"D", |_| 0).unwrap(),
        PathOutcome::NotFound
    );
}

// ==================== Distance Cache Tests ====================

#[test]
fn test_distance_cache_lookup() {
    let graph = diamond();
    let mut cache = DistanceCache::new();
    assert_eq!(cache.distance(&graph, &"A", &"C").unwrap(), Some(3));
    assert_eq!(cache.distance(&graph, &"A", &"D").unwrap(), None);
}

#[test]
fn test_distance_cache_recomputes_when_vertex_count_changes() {
    let mut graph = diamond();
    let mut cache = DistanceCache::new();
    assert_eq!(cache.distance(&graph, &"A", &"C").unwrap(), Some(3));

    graph.insert_vertex("E");
    graph.insert_directed(&"A", &"E", 1).unwrap();
    assert_eq!(cache.distance(&graph, &"A", &"E").unwrap(), Some(1));
}

#[test]
fn test_distance_cache_stale_until_invalidated() {
    let mut graph = diamond();
    let mut cache = DistanceCache::new();
    assert_eq!(cache.distance(&graph, &"A", &"C").unwrap(), Some(3));

    // edge-only mutation: the fingerprint does not change
    graph.remove_directed(&"B", &"C");
    assert_eq!(cache.distance(&graph, &"A", &"C").unwrap(), Some(3));

    cache.invalidate();
    assert_eq!(cache.distance(&graph, &"A", &"C").unwrap(), Some(5));
}
