//! CLI entry point for the `trail` command-line tool.
//!
//! A thin driver over the graphtrail library: it builds small sample
//! graphs and runs the algorithms against them, printing text or JSON.

use std::collections::{BTreeMap, HashMap};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use graphtrail::{
    bellman_ford, bfs, dfs, dijkstra, dijkstra_path, floyd_warshall, priority_search, topo_sort,
    AdjacencyGraph, BellmanFordOutcome, Graph, GraphResult, PathOutcome, TopoOutcome,
};

#[derive(Parser)]
#[command(
    name = "trail",
    about = "graphtrail CLI — run the graph algorithms on sample graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every algorithm over the sample road network
    Demo,
    /// Shortest path between two vertices of the sample network
    Shortest {
        /// Start vertex name
        start: String,
        /// End vertex name
        end: String,
        /// Bias expansion with a popularity score (A*-style) instead of
        /// plain Dijkstra
        #[arg(long)]
        biased: bool,
    },
    /// Topologically sort the sample task graph
    Toposort,
    /// All-pairs shortest-path costs over the sample network
    Apsp,
}

/// The sample road network: a small weighted digraph with one undirected
/// road and one unreachable town.
fn sample_network() -> GraphResult<AdjacencyGraph<String, u32>> {
    let mut network = AdjacencyGraph::new();
    for name in ["A", "B", "C", "D", "E", "X"] {
        network.insert_vertex(name.to_string());
    }
    let directed: [(&str, &str, u32); 6] = [
        ("A", "B", 1),
        ("B", "C", 2),
        ("A", "C", 5),
        ("C", "D", 2),
        ("B", "D", 7),
        ("E", "A", 3),
    ];
    for (u, v, w) in directed {
        network.insert_directed(&u.to_string(), &v.to_string(), w)?;
    }
    network.insert_undirected(&"D".to_string(), &"E".to_string(), 1)?;
    Ok(network)
}

/// The sample task graph (a DAG) for topological sorting.
fn sample_tasks() -> GraphResult<AdjacencyGraph<String, u32>> {
    let mut tasks = AdjacencyGraph::new();
    for i in 1..=6 {
        tasks.insert_vertex(format!("Task {i}"));
    }
    let deps: [(u32, u32, u32); 7] = [
        (1, 6, 7),
        (2, 5, 6),
        (3, 4, 8),
        (4, 2, 5),
        (1, 5, 1),
        (1, 4, 1),
        (6, 5, 1),
    ];
    for (u, v, w) in deps {
        tasks.insert_directed(&format!("Task {u}"), &format!("Task {v}"), w)?;
    }
    Ok(tasks)
}

/// Popularity score per vertex: total degree, precomputed once.
fn popularity(network: &AdjacencyGraph<String, u32>) -> GraphResult<HashMap<String, u32>> {
    let mut scores = HashMap::new();
    for v in network.vertices() {
        let score = (network.in_degree(&v)? + network.out_degree(&v)?) as u32;
        scores.insert(v, score);
    }
    Ok(scores)
}

fn sorted<V: Ord, T>(map: HashMap<V, T>) -> BTreeMap<V, T> {
    map.into_iter().collect()
}

#[derive(Serialize)]
struct DemoOutput {
    vertices: usize,
    edges: usize,
    bfs_backtrack: BTreeMap<String, Option<String>>,
    dfs_backtrack: BTreeMap<String, Option<String>>,
    dijkstra_costs: BTreeMap<String, u32>,
    bellman_ford_costs: Option<BTreeMap<String, u32>>,
    path_a_to_d: PathOutcome<String>,
}

fn cmd_demo(json: bool) -> GraphResult<()> {
    let network = sample_network()?;
    let a = "A".to_string();
    let d = "D".to_string();

    let bfs_backtrack = sorted(bfs(&network, &a)?);
    let dfs_backtrack = sorted(dfs(&network, &a)?);
    let dijkstra_costs = sorted(dijkstra(&network, &a)?);
    let bellman_ford_costs = match bellman_ford(&network, &a)? {
        BellmanFordOutcome::Shortest(table) => Some(sorted(table.costs)),
        BellmanFordOutcome::NegativeCycle => None,
    };
    let path_a_to_d = dijkstra_path(&network, &a, &d)?;

    if json {
        let output = DemoOutput {
            vertices: network.num_vertices(),
            edges: network.num_edges(),
            bfs_backtrack,
            dfs_backtrack,
            dijkstra_costs,
            bellman_ford_costs,
            path_a_to_d,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
    } else {
        println!("Sample network:");
        print!("{network}");
        println!();
        println!("BFS backtrack from A: {bfs_backtrack:?}");
        println!("DFS backtrack from A: {dfs_backtrack:?}");
        println!("Dijkstra costs from A: {dijkstra_costs:?}");
        match bellman_ford_costs {
            Some(costs) => println!("Bellman-Ford costs from A: {costs:?}"),
            None => println!("Bellman-Ford: negative cycle reachable from A"),
        }
        match path_a_to_d {
            PathOutcome::Found(path) => println!("Shortest path A -> D: {}", path.join(" -> ")),
            PathOutcome::NotFound => println!("Shortest path A -> D: not found"),
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ShortestOutput {
    start: String,
    end: String,
    biased: bool,
    outcome: PathOutcome<String>,
}

fn cmd_shortest(start: &str, end: &str, biased: bool, json: bool) -> GraphResult<()> {
    let network = sample_network()?;
    let start = start.to_string();
    let end = end.to_string();

    let outcome = if biased {
        let scores = popularity(&network)?;
        priority_search(&network, &start, &end, |v| {
            scores.get(v).copied().unwrap_or(0)
        })?
    } else {
        dijkstra_path(&network, &start, &end)?
    };

    if json {
        let output = ShortestOutput {
            start,
            end,
            biased,
            outcome,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
    } else {
        match outcome {
            PathOutcome::Found(path) => {
                println!("Shortest path {start} -> {end}: {}", path.join(" -> "))
            }
            PathOutcome::NotFound => println!("No path from {start} to {end}"),
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ToposortOutput {
    outcome: TopoOutcome<String>,
}

fn cmd_toposort(json: bool) -> GraphResult<()> {
    let tasks = sample_tasks()?;
    let outcome = topo_sort(&tasks)?;

    if json {
        let output = ToposortOutput { outcome };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
    } else {
        println!("Task graph:");
        print!("{tasks}");
        match outcome {
            TopoOutcome::Ordering(order) => {
                println!("Topological ordering: {}", order.join(", "))
            }
            TopoOutcome::Cyclic => println!("Graph is cyclic; no ordering exists"),
        }
    }
    Ok(())
}

fn cmd_apsp(json: bool) -> GraphResult<()> {
    let network = sample_network()?;
    let table: BTreeMap<String, BTreeMap<String, u32>> = floyd_warshall(&network)?
        .into_iter()
        .map(|(u, row)| (u, sorted(row)))
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&table).unwrap_or_default()
        );
    } else {
        println!("All-pairs shortest-path costs (absent pair = unreachable):");
        for (u, row) in &table {
            println!("  {u}: {row:?}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Demo => cmd_demo(json),
        Commands::Shortest {
            start,
            end,
            biased,
        } => cmd_shortest(&start, &end, biased, json),
        Commands::Toposort => cmd_toposort(json),
        Commands::Apsp => cmd_apsp(json),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
