//! Traversal and shortest-path benchmark
//!
//! Times every algorithm on a fixed sixteen-node directed graph and on a
//! larger weighted grid. Set `RUST_LOG=tactica_graph=debug` to see per-run logs.

use std::time::Instant;
use tactica_graph::{
    best_first, breadth_first, depth_first, dijkstra, shortest_paths, EdgeDirection,
    WeightedGraph,
};
use tracing_subscriber::EnvFilter;

// ============================================================================
// TEST GRAPHS
// ============================================================================

/// Directed graph over nodes A..P with a single long route to P
fn lettered_graph() -> WeightedGraph<char> {
    const EDGES: [(char, char, f32); 27] = [
        ('A', 'B', 4.0),
        ('A', 'C', 2.0),
        ('A', 'D', 7.0),
        ('B', 'C', 6.0),
        ('B', 'E', 6.0),
        ('B', 'F', 4.0),
        ('B', 'G', 12.0),
        ('C', 'G', 7.0),
        ('D', 'H', 3.0),
        ('F', 'E', 2.0),
        ('F', 'I', 13.0),
        ('F', 'J', 13.0),
        ('G', 'D', 2.0),
        ('G', 'F', 1.0),
        ('G', 'H', 3.0),
        ('G', 'J', 8.0),
        ('G', 'K', 4.0),
        ('H', 'K', 3.0),
        ('H', 'L', 6.0),
        ('H', 'M', 18.0),
        ('I', 'N', 2.0),
        ('J', 'I', 5.0),
        ('J', 'N', 3.0),
        ('J', 'O', 7.0),
        ('K', 'J', 5.0),
        ('K', 'P', 13.0),
        ('M', 'P', 3.0),
    ];

    let mut graph = WeightedGraph::new();
    for (source, destination, weight) in EDGES {
        graph.add_edge(source, destination, weight, EdgeDirection::Unidirectional);
    }
    graph
}

/// Square grid with bidirectional edges whose weights vary by position
fn grid_graph(side: u32) -> WeightedGraph<(u32, u32)> {
    let mut graph = WeightedGraph::new();
    for y in 0..side {
        for x in 0..side {
            let weight = 1.0 + ((x * 7 + y * 13) % 5) as f32;
            if x + 1 < side {
                graph.add_edge((x, y), (x + 1, y), weight, EdgeDirection::Bidirectional);
            }
            if y + 1 < side {
                graph.add_edge((x, y), (x, y + 1), weight, EdgeDirection::Bidirectional);
            }
        }
    }
    graph
}

// ============================================================================
// BENCHMARK HARNESS
// ============================================================================

#[derive(Clone, Debug)]
struct BenchmarkResult {
    algorithm: &'static str,
    graph: &'static str,
    avg_time_us: f64,
    output_len: usize,
}

impl BenchmarkResult {
    fn to_table_row(&self) -> String {
        format!(
            "| {} | {} | {:.2}us | {} |",
            self.algorithm, self.graph, self.avg_time_us, self.output_len
        )
    }
}

fn time<F>(
    algorithm: &'static str,
    graph: &'static str,
    iterations: u32,
    mut run: F,
) -> BenchmarkResult
where
    F: FnMut() -> usize,
{
    let mut output_len = 0;
    let start = Instant::now();
    for _ in 0..iterations {
        output_len = std::hint::black_box(run());
    }
    let total_us = start.elapsed().as_secs_f64() * 1_000_000.0;

    BenchmarkResult {
        algorithm,
        graph,
        avg_time_us: total_us / iterations as f64,
        output_len,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lettered = lettered_graph();
    let grid = grid_graph(64);
    let corner = (63, 63);
    let iterations = 2_000;

    let results = vec![
        time("depth-first", "lettered", iterations, || {
            depth_first(&lettered, &'A', None).len()
        }),
        time("breadth-first", "lettered", iterations, || {
            breadth_first(&lettered, &'A', None).len()
        }),
        time("best-first", "lettered", iterations, || {
            best_first(&lettered, &'A', None).len()
        }),
        time("dijkstra A->P", "lettered", iterations, || {
            dijkstra(&lettered, &'A', &'P').len()
        }),
        time("shortest paths", "lettered", iterations, || {
            shortest_paths(&lettered, &'A').len()
        }),
        time("depth-first", "grid 64x64", iterations / 20, || {
            depth_first(&grid, &(0, 0), None).len()
        }),
        time("breadth-first", "grid 64x64", iterations / 20, || {
            breadth_first(&grid, &(0, 0), None).len()
        }),
        time("best-first", "grid 64x64", iterations / 20, || {
            best_first(&grid, &(0, 0), None).len()
        }),
        time("dijkstra corner", "grid 64x64", iterations / 20, || {
            dijkstra(&grid, &(0, 0), &corner).len()
        }),
    ];

    println!("| Algorithm | Graph | Avg time | Output |");
    println!("|-----------|-------|----------|--------|");
    for result in &results {
        println!("{}", result.to_table_row());
    }
}
