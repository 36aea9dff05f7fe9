//! Criterion benchmarks for graphtrail.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graphtrail::graph::{AdjacencyGraph, Graph};
use graphtrail::{bfs, dijkstra, floyd_warshall, topo_sort};

/// Build a random weighted digraph with a fixed seed.
fn make_large_graph(vertices: u32, edges_per_vertex: usize) -> AdjacencyGraph<u32, u32> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = AdjacencyGraph::new();
    for i in 0..vertices {
        graph.insert_vertex(i);
    }
    for u in 0..vertices {
        for _ in 0..edges_per_vertex {
            let v = rng.gen_range(0..vertices);
            if u != v {
                let w = rng.gen_range(1..100);
                graph
                    .insert_directed(&u, &v, w)
                    .expect("vertices were inserted");
            }
        }
    }
    graph
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 8);
    c.bench_function("bfs_10k_nodes", |b| b.iter(|| bfs(&graph, &0).unwrap()));
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 8);
    c.bench_function("dijkstra_10k_nodes", |b| {
        b.iter(|| dijkstra(&graph, &0).unwrap())
    });
}

fn bench_floyd_warshall(c: &mut Criterion) {
    let graph = make_large_graph(100, 8);
    c.bench_function("floyd_warshall_100_nodes", |b| {
        b.iter(|| floyd_warshall(&graph).unwrap())
    });
}

fn bench_topo_sort(c: &mut Criterion) {
    // layered DAG: edges only point to higher IDs, so it stays sortable
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph: AdjacencyGraph<u32, u32> = AdjacencyGraph::new();
    for i in 0..1_000u32 {
        graph.insert_vertex(i);
    }
    for u in 0..999u32 {
        for _ in 0..4 {
            let v = rng.gen_range(u + 1..1_000);
            graph
                .insert_directed(&u, &v, 1)
                .expect("vertices were inserted");
        }
    }
    c.bench_function("topo_sort_1k_nodes", |b| {
        b.iter(|| topo_sort(&graph).unwrap())
    });
}

criterion_group!(
    benches,
    bench_bfs,
    bench_dijkstra,
    bench_floyd_warshall,
    bench_topo_sort
);
criterion_main!(benches);
