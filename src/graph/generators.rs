use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// The six-vertex graph from the ripple-spreading paper's worked example.
///
/// From 0 to 5 it has seven simple paths with lengths 5, 7, 8, 8, 8, 11 and 11.
pub fn reference_graph() -> DirectedGraph<OrderedFloat<f64>> {
    let rows: Vec<Vec<(usize, f64)>> = vec![
        vec![(1, 3.0), (3, 2.0)],
        vec![(2, 4.0)],
        vec![(4, 2.0), (5, 1.0)],
        vec![(1, 1.0), (2, 2.0), (4, 3.0)],
        vec![(5, 2.0)],
        vec![],
    ];

    let mut graph = DirectedGraph::with_capacity(rows.len());
    for (from, row) in rows.into_iter().enumerate() {
        for (to, weight) in row {
            graph.add_edge(from, to, OrderedFloat(weight));
        }
    }
    graph
}

/// Generates a width*height grid with unit edges between 4-connected neighbors
/// in both directions. Vertex `(x, y)` has ID `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, OrderedFloat(1.0));
                graph.add_edge(vertex + 1, vertex, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, OrderedFloat(1.0));
                graph.add_edge(vertex + width, vertex, OrderedFloat(1.0));
            }
        }
    }

    graph
}

/// Generates a random directed graph with roughly `edge_factor * n` edges and
/// integer weights in `1..=10`. The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1..=10) as f64);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a layered DAG: vertex 0 is the source, the last vertex is the sink,
/// and every vertex of a layer links to every vertex of the next layer.
/// Weights are integers in `1..=5`.
pub fn generate_layered(layers: usize, width: usize, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let n = layers * width + 2;
    let sink = n - 1;
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);
    let vertex = |layer: usize, slot: usize| 1 + layer * width + slot;

    if layers == 0 || width == 0 {
        graph.add_edge(0, sink, OrderedFloat(rng.gen_range(1..=5) as f64));
        return graph;
    }

    for slot in 0..width {
        graph.add_edge(0, vertex(0, slot), OrderedFloat(rng.gen_range(1..=5) as f64));
    }
    for layer in 0..layers - 1 {
        for from in 0..width {
            for to in 0..width {
                let weight = OrderedFloat(rng.gen_range(1..=5) as f64);
                graph.add_edge(vertex(layer, from), vertex(layer + 1, to), weight);
            }
        }
    }
    for slot in 0..width {
        graph.add_edge(vertex(layers - 1, slot), sink, OrderedFloat(rng.gen_range(1..=5) as f64));
    }

    graph
}
