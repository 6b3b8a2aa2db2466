use ordered_float::OrderedFloat;
use ripple_ksp::algorithm::ripple_spreading::{RippleConfig, RippleSpreading};
use ripple_ksp::graph::generators::reference_graph;
use ripple_ksp::graph::DirectedGraph;
use ripple_ksp::{Error, KShortestPathAlgorithm, PathOutcome};

type W = OrderedFloat<f64>;

fn graph(rows: Vec<Vec<(usize, f64)>>) -> DirectedGraph<W> {
    DirectedGraph::from_adjacency(
        rows.into_iter()
            .map(|row| row.into_iter().map(|(to, w)| (to, OrderedFloat(w))).collect::<Vec<_>>()),
    )
    .unwrap()
}

fn lengths(values: &[f64]) -> Vec<W> {
    values.iter().map(|&v| OrderedFloat(v)).collect()
}

#[test]
fn test_reference_scenario() {
    let g = reference_graph();
    let result = RippleSpreading::new().compute_k_shortest_paths(&g, 0, 5, 4).unwrap();

    assert_eq!(result.lengths(), lengths(&[5.0, 7.0, 8.0, 8.0]));

    let paths: Vec<Vec<usize>> = result.paths().iter().map(|p| p.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            vec![0, 3, 2, 5],
            vec![0, 3, 4, 5],
            vec![0, 3, 2, 4, 5],
            vec![0, 1, 2, 5],
        ]
    );
    assert_eq!(result.source, 0);
    assert_eq!(result.destination, 5);
    assert_eq!(result.stats.speed, 1.0);
}

#[test]
fn test_reference_scenario_all_simple_paths() {
    let g = reference_graph();
    let result = RippleSpreading::new().compute_k_shortest_paths(&g, 0, 5, 7).unwrap();

    assert_eq!(result.lengths(), lengths(&[5.0, 7.0, 8.0, 8.0, 8.0, 11.0, 11.0]));
    assert_eq!(result.paths()[4].path, vec![0, 3, 1, 2, 5]);
    assert_eq!(result.paths()[5].path, vec![0, 1, 2, 4, 5]);
    assert_eq!(result.paths()[6].path, vec![0, 3, 1, 2, 4, 5]);
}

#[test]
fn test_more_paths_than_exist_is_infeasible() {
    let g = reference_graph();
    let result = RippleSpreading::new().compute_k_shortest_paths(&g, 0, 5, 8).unwrap();

    assert!(!result.is_feasible());
    assert!(result.paths().is_empty());
    let diagnostic = result.diagnostic().unwrap();
    assert!(diagnostic.contains("No feasible solution"), "{}", diagnostic);
    assert!(diagnostic.contains("7 of 8"), "{}", diagnostic);
}

#[test]
fn test_unreachable_destination() {
    let g = reference_graph();
    let rsa = RippleSpreading::new();

    let result = rsa.compute_k_shortest_paths(&g, 5, 0, 1).unwrap();
    assert!(matches!(result.outcome, PathOutcome::Infeasible { .. }));
    assert!(result.paths().is_empty());

    // The precheck reaches the same verdict without simulating
    let result = rsa
        .with_reachability_precheck(true)
        .compute_k_shortest_paths(&g, 5, 0, 1)
        .unwrap();
    assert!(!result.is_feasible());
    assert!(result.diagnostic().unwrap().contains("unreachable"));
    assert_eq!(result.stats.ticks, 0);
}

#[test]
fn test_precheck_does_not_change_feasible_results() {
    let g = reference_graph();
    let plain = RippleSpreading::new().compute_k_shortest_paths(&g, 0, 5, 4).unwrap();
    let checked = RippleSpreading::new()
        .with_config(RippleConfig {
            reachability_precheck: true,
            ..RippleConfig::default()
        })
        .compute_k_shortest_paths(&g, 0, 5, 4)
        .unwrap();
    assert_eq!(plain, checked);
}

#[test]
fn test_source_is_destination() {
    let g = reference_graph();
    let result = RippleSpreading::new().compute_k_shortest_paths(&g, 0, 0, 1).unwrap();
    assert_eq!(result.paths().len(), 1);
    assert_eq!(result.paths()[0].path, vec![0]);
    assert_eq!(result.paths()[0].length, OrderedFloat(0.0));
    assert_eq!(result.stats.ticks, 0);

    // An edgeless graph still has the trivial path
    let lonely: DirectedGraph<W> = DirectedGraph::with_capacity(1);
    let result = RippleSpreading::new().compute_k_shortest_paths(&lonely, 0, 0, 1).unwrap();
    assert_eq!(result.lengths(), lengths(&[0.0]));

    let result = RippleSpreading::new().compute_k_shortest_paths(&lonely, 0, 0, 2).unwrap();
    assert!(!result.is_feasible());
}

#[test]
fn test_cycles_yield_walks() {
    let g = graph(vec![vec![(1, 1.0)], vec![(2, 1.0)], vec![(0, 1.0), (3, 2.0)], vec![]]);
    let result = RippleSpreading::new().compute_k_shortest_paths(&g, 0, 3, 3).unwrap();

    assert_eq!(result.lengths(), lengths(&[4.0, 7.0, 10.0]));
    assert_eq!(result.paths()[1].path, vec![0, 1, 2, 0, 1, 2, 3]);

    let result = RippleSpreading::new().compute_k_shortest_paths(&g, 0, 0, 2).unwrap();
    assert_eq!(result.paths()[1].path, vec![0, 1, 2, 0]);
    assert_eq!(result.paths()[1].length, OrderedFloat(3.0));
}

#[test]
fn test_fractional_weights() {
    let g = graph(vec![vec![(1, 0.5), (2, 1.25)], vec![(2, 0.5)], vec![]]);
    let result = RippleSpreading::new().compute_k_shortest_paths(&g, 0, 2, 2).unwrap();

    assert_eq!(result.lengths(), lengths(&[1.0, 1.25]));
    assert_eq!(result.paths()[0].path, vec![0, 1, 2]);
    assert_eq!(result.paths()[1].path, vec![0, 2]);
    assert_eq!(result.stats.speed, 0.5);
}

#[test]
fn test_invalid_input_fails_fast() {
    let g = reference_graph();
    let rsa = RippleSpreading::new();

    let err = rsa.compute_k_shortest_paths(&g, 0, 5, 0).unwrap_err();
    assert_eq!(err, Error::InvalidPathCount(0));
    assert!(err.is_invalid_input());

    assert_eq!(rsa.compute_k_shortest_paths(&g, 10, 5, 1).unwrap_err(), Error::InvalidVertex(10));

    let edgeless: DirectedGraph<W> = DirectedGraph::with_capacity(3);
    let err = rsa.compute_k_shortest_paths(&edgeless, 0, 2, 1).unwrap_err();
    assert_eq!(err, Error::EmptyGraph);
    assert!(err.is_invalid_input());
}

#[test]
fn test_result_serializes_to_json() {
    let g = reference_graph();
    let result = RippleSpreading::new().compute_k_shortest_paths(&g, 0, 5, 2).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    let found = &json["outcome"]["Found"];
    assert_eq!(found[0]["rank"], 1);
    assert_eq!(found[0]["path"], serde_json::json!([0, 3, 2, 5]));
    assert_eq!(found[1]["length"], 7.0);

    let infeasible = RippleSpreading::new().compute_k_shortest_paths(&g, 5, 0, 1).unwrap();
    let json = serde_json::to_value(&infeasible).unwrap();
    assert!(json["outcome"]["Infeasible"]["diagnostic"].is_string());
}
