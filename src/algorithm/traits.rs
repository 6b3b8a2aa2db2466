use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use crate::graph::Graph;
use crate::Result;

/// One of the k paths found, with its 1-based rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Rank starting at 1, in arrival order at the destination
    pub rank: usize,

    /// Vertices from source to destination, both included
    pub path: Vec<usize>,

    /// Sum of the edge weights along `path`
    pub length: W,
}

/// How a k shortest paths search ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathOutcome<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The destination was reached k times
    Found(Vec<RankedPath<W>>),

    /// The search ran out of options before reaching the destination k times
    Infeasible { diagnostic: String },
}

/// Counters collected while simulating
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Simulated ticks elapsed
    pub ticks: u64,

    /// Ripples created, seed included
    pub ripples_created: usize,

    /// Largest number of simultaneously active ripples
    pub peak_active: usize,

    /// Radius growth per tick, 0 when no simulation ran
    pub speed: f64,
}

/// Result of a k shortest paths algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex ID
    pub source: usize,

    /// Destination vertex ID
    pub destination: usize,

    /// Number of paths requested
    pub k: usize,

    /// Ranked paths, or why there are none
    pub outcome: PathOutcome<W>,

    pub stats: SimulationStats,
}

impl<W> KShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Ranked paths; empty when the search was infeasible
    pub fn paths(&self) -> &[RankedPath<W>] {
        match &self.outcome {
            PathOutcome::Found(paths) => paths.as_slice(),
            PathOutcome::Infeasible { .. } => &[],
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self.outcome, PathOutcome::Found(_))
    }

    /// The infeasibility diagnostic, if any
    pub fn diagnostic(&self) -> Option<&str> {
        match &self.outcome {
            PathOutcome::Found(_) => None,
            PathOutcome::Infeasible { diagnostic } => Some(diagnostic),
        }
    }

    /// Lengths of the ranked paths, in rank order
    pub fn lengths(&self) -> Vec<W> {
        self.paths().iter().map(|p| p.length).collect()
    }
}

/// Trait for k shortest paths algorithms
pub trait KShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute up to k shortest paths from `source` to `destination`.
    ///
    /// Invalid input is an error. Failing to find k paths is not: it is reported as
    /// [`PathOutcome::Infeasible`].
    fn compute_k_shortest_paths(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
        k: usize,
    ) -> Result<KShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
