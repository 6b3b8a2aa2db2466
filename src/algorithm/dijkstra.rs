use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::data_structures::DistanceQueue;
use crate::{Error, Result};

/// Distances and predecessors from one source vertex
#[derive(Debug, Clone)]
pub struct DistanceTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> DistanceTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distances.get(target).map_or(false, Option::is_some)
    }

    /// Walks predecessors back from `target`; `None` if it is unreachable
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Classic Dijkstra's algorithm implementation.
///
/// Serves as the single shortest path reference and as a reachability check
/// before ripple spreading.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Shortest distances from `source` to every vertex
    pub fn compute_distances<W, G>(&self, graph: &G, source: usize) -> Result<DistanceTree<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = DistanceQueue::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry
            if matches!(distances[u], Some(current) if current < dist_u) {
                continue;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u + weight;
                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(DistanceTree {
            distances,
            predecessors,
            source,
        })
    }

    /// One shortest path from `source` to `destination` with its length
    pub fn shortest_path<W, G>(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
    ) -> Result<Option<(Vec<usize>, W)>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if !graph.has_vertex(destination) {
            return Err(Error::InvalidVertex(destination));
        }

        let tree = self.compute_distances(graph, source)?;
        Ok(tree
            .path_to(destination)
            .zip(tree.distances[destination]))
    }
}
