//! Ripple KSP - k shortest paths by ripple spreading
//!
//! This library implements the ripple-spreading algorithm (RSA) for the k shortest
//! paths problem, as described in "Finding the k shortest paths by ripple-spreading
//! algorithms" by Hu et al. (2020).
//!
//! Ripples expand from the source at a uniform speed equal to the smallest edge
//! weight. Whenever a wavefront crosses an edge, a new ripple is born at the far
//! endpoint. Every node accepts at most k ripples, and the first k ripples to reach
//! the destination are the k shortest paths.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, ripple_spreading::RippleSpreading, KShortestPathAlgorithm,
    KShortestPathResult, PathOutcome, RankedPath,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Edge weight must be positive and finite: {from} -> {to} has weight {weight}")]
    InvalidWeight { from: usize, to: usize, weight: f64 },

    #[error("Path count k must be at least 1, got {0}")]
    InvalidPathCount(usize),

    #[error("Graph has no edges, ripple speed is undefined")]
    EmptyGraph,

    #[error("Simulation exceeded the {resource} ceiling of {limit}")]
    ResourceExhausted { resource: &'static str, limit: u64 },
}

impl Error {
    /// True for errors caused by the caller's input rather than by the run itself
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::ResourceExhausted { .. })
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
