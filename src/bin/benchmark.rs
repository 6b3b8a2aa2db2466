use std::time::{Duration, Instant};
use log::info;
use ordered_float::OrderedFloat;
use rand::Rng;
use ripple_ksp::algorithm::{dijkstra::Dijkstra, ripple_spreading::RippleSpreading, KShortestPathAlgorithm};
use ripple_ksp::graph::{generators::generate_random, DirectedGraph, Graph};

// Function to benchmark ripple spreading for one (source, target, k) query
fn benchmark_query(
    graph: &DirectedGraph<OrderedFloat<f64>>,
    source: usize,
    target: usize,
    k: usize,
) -> Option<Duration> {
    let rsa = RippleSpreading::new();

    let start = Instant::now();
    let result = match rsa.compute_k_shortest_paths(graph, source, target, k) {
        Ok(result) => result,
        Err(e) => {
            println!("  - {} -> {}: error: {}", source, target, e);
            return None;
        }
    };
    let duration = start.elapsed();

    if result.is_feasible() {
        let lengths: Vec<f64> = result.lengths().iter().map(|l| l.into_inner()).collect();
        println!(
            "  - {} -> {}: {} paths in {:?} ({} ticks, {} ripples), lengths {:?}",
            source,
            target,
            result.paths().len(),
            duration,
            result.stats.ticks,
            result.stats.ripples_created,
            lengths
        );
    } else {
        println!("  - {} -> {}: infeasible after {:?}", source, target, duration);
    }

    Some(duration)
}

fn main() {
    env_logger::init();

    // (vertices, edge factor, k)
    let configurations = vec![
        (1_000, 3.0, 5),
        (10_000, 3.0, 5),
        (10_000, 3.0, 20),
        (50_000, 2.0, 10),
    ];
    let queries = 5;

    let mut rng = rand::thread_rng();
    let dijkstra = Dijkstra::new();

    for (n, edge_factor, k) in configurations {
        let seed: u64 = rng.gen();
        let graph = generate_random(n, edge_factor, seed);
        println!(
            "\nGraph: {} vertices, {} edges (seed {}), k = {}",
            graph.vertex_count(),
            graph.edge_count(),
            seed,
            k
        );

        let mut total = Duration::ZERO;
        let mut completed = 0;
        for _ in 0..queries {
            let source = rng.gen_range(0..n);
            let target = rng.gen_range(0..n);

            if let Some(duration) = benchmark_query(&graph, source, target, k) {
                total += duration;
                completed += 1;
            }

            // Cross-check rank 1 against Dijkstra
            if let (Ok(Some((_, expected))), Ok(result)) = (
                dijkstra.shortest_path(&graph, source, target),
                RippleSpreading::new().compute_k_shortest_paths(&graph, source, target, 1),
            ) {
                if result.lengths().first() != Some(&expected) {
                    println!("  ! rank 1 differs from Dijkstra ({:?})", expected);
                }
            }
        }

        if completed > 0 {
            info!("{} queries completed", completed);
            println!("Average: {:?}", total / completed as u32);
        }
    }
}
