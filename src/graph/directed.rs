use crate::graph::traits::{is_valid_weight, Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists.
///
/// Vertex IDs are dense (`0..vertex_count`), so adjacency is stored in a `Vec`
/// indexed by vertex. Each list keeps its edges in insertion order.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from per-vertex neighbor rows.
    ///
    /// Row `i` lists the `(neighbor, weight)` pairs of vertex `i`; the number of rows
    /// is the vertex count. A neighbor repeated within a row keeps its first position
    /// and takes the last weight, like inserting into an ordered map.
    pub fn from_adjacency<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (usize, W)>,
    {
        let rows: Vec<Vec<(usize, W)>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();

        let mut graph = DirectedGraph::with_capacity(rows.len());
        for (from, row) in rows.into_iter().enumerate() {
            for (to, weight) in row {
                if !graph.has_vertex(to) {
                    return Err(Error::InvalidEdge(from, to));
                }
                if !graph.add_edge(from, to, weight) {
                    return Err(Error::InvalidWeight {
                        from,
                        to,
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }

        Ok(graph)
    }

    /// Validate that every edge weight is positive and finite
    pub fn validate_positive(&self) -> Result<()> {
        for (from, edges) in self.outgoing_edges.iter().enumerate() {
            for &(to, weight) in edges {
                if !is_valid_weight(weight) {
                    return Err(Error::InvalidWeight {
                        from,
                        to,
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing_edges.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing_edges.push(Vec::new());
        self.outgoing_edges.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || !is_valid_weight(weight) {
            return false;
        }

        let outgoing = &mut self.outgoing_edges[from];
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| *target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !is_valid_weight(weight) {
            return false;
        }

        let edge = self
            .outgoing_edges
            .get_mut(from)
            .and_then(|outgoing| outgoing.iter_mut().find(|(target, _)| *target == to));
        match edge {
            Some(edge) => {
                edge.1 = weight;
                true
            }
            None => false,
        }
    }
}
