pub mod traits;
pub mod dijkstra;
pub mod neighbor_index;
pub mod ripple_spreading;

pub use traits::{
    KShortestPathAlgorithm, KShortestPathResult, PathOutcome, RankedPath, SimulationStats,
};
