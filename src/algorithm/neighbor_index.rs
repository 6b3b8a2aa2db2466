use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::{Error, Result};

/// Outgoing neighbors of every vertex, with edge weights, in graph iteration order.
///
/// Built once per run so the tick loop can scan neighbors from a flat slice
/// instead of going through the graph's boxed iterators.
#[derive(Debug, Clone)]
pub struct NeighborIndex<W>
where
    W: Float + Zero + Debug + Copy,
{
    neighbors: Vec<Vec<(usize, W)>>,
}

impl<W> NeighborIndex<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds the index from any graph
    pub fn build<G: Graph<W>>(graph: &G) -> Self {
        let neighbors = (0..graph.vertex_count())
            .map(|v| graph.outgoing_edges(v).collect())
            .collect();
        NeighborIndex { neighbors }
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// `(neighbor, weight)` pairs leaving `vertex`
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        &self.neighbors[vertex]
    }

    /// Iterates over every edge as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(from, row)| row.iter().map(move |&(to, weight)| (from, to, weight)))
    }
}

/// Ripple speed: the smallest edge weight in the graph.
///
/// A ripple's radius grows by this much every tick, so no edge can be crossed
/// in less than one tick.
pub fn wavefront_speed<W>(index: &NeighborIndex<W>) -> Result<W>
where
    W: Float + Zero + Debug + Copy,
{
    index
        .edges()
        .map(|(_, _, weight)| weight)
        .fold(None, |min: Option<W>, w| Some(min.map_or(w, |m| m.min(w))))
        .ok_or(Error::EmptyGraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::reference_graph;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_index_preserves_order() {
        let g = reference_graph();
        let index = NeighborIndex::build(&g);
        assert_eq!(index.vertex_count(), 6);
        assert_eq!(index.edge_count(), 9);

        let targets: Vec<usize> = index.neighbors(3).iter().map(|&(to, _)| to).collect();
        assert_eq!(targets, vec![1, 2, 4]);
        assert!(index.neighbors(5).is_empty());
    }

    #[test]
    fn test_speed_is_min_weight() {
        let g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::from_adjacency(vec![
            vec![(1, OrderedFloat(2.5))],
            vec![(2, OrderedFloat(0.75)), (0, OrderedFloat(4.0))],
            vec![],
        ])
        .unwrap();
        let index = NeighborIndex::build(&g);
        assert_eq!(wavefront_speed(&index).unwrap(), OrderedFloat(0.75));
    }

    #[test]
    fn test_speed_of_edgeless_graph() {
        let g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_capacity(3);
        let index = NeighborIndex::build(&g);
        assert_eq!(wavefront_speed(&index), Err(Error::EmptyGraph));
    }
}
