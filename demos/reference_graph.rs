use colored::*;
use ripple_ksp::graph::generators::reference_graph;
use ripple_ksp::graph::Graph;
use ripple_ksp::{KShortestPathAlgorithm, PathOutcome, RippleSpreading};

fn main() {
    env_logger::init();

    let graph = reference_graph();
    let (source, destination) = (0, 5);

    println!("{}", "--- Ripple spreading on the reference graph ---".bold());
    println!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let rsa = RippleSpreading::new();
    for k in [1, 4, 7, 8] {
        println!("\n{} k = {}", "▶".cyan(), k);
        let result = match rsa.compute_k_shortest_paths(&graph, source, destination, k) {
            Ok(result) => result,
            Err(e) => {
                println!("  {}", e.to_string().red());
                continue;
            }
        };

        match &result.outcome {
            PathOutcome::Found(paths) => {
                for ranked in paths {
                    let route: Vec<String> = ranked.path.iter().map(|v| v.to_string()).collect();
                    println!(
                        "  {:>2}. {}  length {}",
                        ranked.rank,
                        route.join(" → ").green(),
                        ranked.length.into_inner().to_string().yellow()
                    );
                }
            }
            PathOutcome::Infeasible { diagnostic } => println!("  {}", diagnostic.red()),
        }
        println!(
            "  {} ticks, {} ripples, peak {} active",
            result.stats.ticks, result.stats.ripples_created, result.stats.peak_active
        );
    }
}
