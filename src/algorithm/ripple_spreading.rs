use std::fmt::Debug;
use log::{debug, info, trace, warn};
use num_traits::{Float, Zero};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::neighbor_index::{wavefront_speed, NeighborIndex};
use crate::algorithm::{
    KShortestPathAlgorithm, KShortestPathResult, PathOutcome, RankedPath, SimulationStats,
};
use crate::data_structures::{RippleArena, RippleId, VisitLedger};
use crate::graph::traits::is_valid_weight;
use crate::graph::Graph;
use crate::{Error, Result};

/// Default ceiling on simulated ticks
pub const DEFAULT_MAX_TICKS: u64 = 10_000_000;

/// Run limits and optional shortcuts for [`RippleSpreading`]
#[derive(Debug, Clone, PartialEq)]
pub struct RippleConfig {
    /// Fail with `ResourceExhausted` after this many ticks (`None` disables)
    pub max_ticks: Option<u64>,
    /// Fail with `ResourceExhausted` once more ripples than this exist (`None` disables)
    pub max_ripples: Option<usize>,
    /// Run Dijkstra first and report an unreachable destination without simulating
    pub reachability_precheck: bool,
}

impl Default for RippleConfig {
    fn default() -> Self {
        RippleConfig {
            max_ticks: Some(DEFAULT_MAX_TICKS),
            max_ripples: None,
            reachability_precheck: false,
        }
    }
}

/// Ripple-spreading algorithm for the k shortest paths problem.
///
/// Ripples start at the source and grow by the smallest edge weight each tick.
/// When a ripple's radius crosses an edge, a new ripple is born at the far end,
/// unless that vertex has already produced k ripples. The run ends as soon as the
/// destination has produced k ripples; their paths, in arrival order, are the answer.
#[derive(Debug, Default)]
pub struct RippleSpreading {
    config: RippleConfig,
}

impl RippleSpreading {
    /// Create a new RippleSpreading instance with default settings
    pub fn new() -> Self {
        RippleSpreading {
            config: RippleConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: RippleConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the tick ceiling (`None` disables it)
    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.config.max_ticks = max_ticks;
        self
    }

    /// Set the ripple ceiling (`None` disables it)
    pub fn with_max_ripples(mut self, max_ripples: Option<usize>) -> Self {
        self.config.max_ripples = max_ripples;
        self
    }

    /// Enable or disable the Dijkstra reachability check before simulating
    pub fn with_reachability_precheck(mut self, enabled: bool) -> Self {
        self.config.reachability_precheck = enabled;
        self
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Rejects input the simulation cannot run on
    fn validate<W>(index: &NeighborIndex<W>, source: usize, destination: usize, k: usize) -> Result<()>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        if k < 1 {
            return Err(Error::InvalidPathCount(k));
        }

        let n = index.vertex_count();
        for vertex in [source, destination] {
            if vertex >= n {
                return Err(Error::InvalidVertex(vertex));
            }
        }

        for (from, to, weight) in index.edges() {
            if to >= n {
                return Err(Error::InvalidEdge(from, to));
            }
            if !is_valid_weight(weight) {
                return Err(Error::InvalidWeight {
                    from,
                    to,
                    weight: weight.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    fn infeasible<W>(
        source: usize,
        destination: usize,
        k: usize,
        diagnostic: String,
        stats: SimulationStats,
    ) -> KShortestPathResult<W>
    where
        W: Float + Zero + Debug + Copy,
    {
        warn!("{}", diagnostic);
        KShortestPathResult {
            source,
            destination,
            k,
            outcome: PathOutcome::Infeasible { diagnostic },
            stats,
        }
    }
}

impl<W, G> KShortestPathAlgorithm<W, G> for RippleSpreading
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Ripple Spreading"
    }

    fn compute_k_shortest_paths(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
        k: usize,
    ) -> Result<KShortestPathResult<W>> {
        let index = NeighborIndex::build(graph);
        Self::validate(&index, source, destination, k)?;

        let speed = match wavefront_speed(&index) {
            Ok(speed) => speed,
            // Without edges only the seed itself can ever arrive, so speed is moot
            Err(Error::EmptyGraph) if source == destination => W::zero(),
            Err(e) => return Err(e),
        };

        debug!(
            "Ripple spreading on {} vertices, {} edges: {} -> {}, k={}, speed={:?}",
            index.vertex_count(),
            index.edge_count(),
            source,
            destination,
            k,
            speed
        );

        if self.config.reachability_precheck && source != destination {
            let tree = Dijkstra::new().compute_distances(graph, source)?;
            if !tree.is_reachable(destination) {
                let diagnostic = format!(
                    "No feasible solution: destination {} is unreachable from {}",
                    destination, source
                );
                return Ok(Self::infeasible(source, destination, k, diagnostic, SimulationStats::default()));
            }
        }

        let mut sim = Simulation::new(&index, speed, source, destination, k);

        while !sim.is_complete() {
            if sim.active.is_empty() {
                let diagnostic = format!(
                    "No feasible solution: destination {} reached {} of {} times before all ripples died out",
                    destination,
                    sim.ledger.len(destination),
                    k
                );
                return Ok(Self::infeasible(source, destination, k, diagnostic, sim.stats()));
            }

            if let Some(limit) = self.config.max_ticks {
                if sim.ticks >= limit {
                    warn!("Ripple spreading stopped at the tick ceiling ({})", limit);
                    return Err(Error::ResourceExhausted { resource: "tick", limit });
                }
            }

            sim.step();

            if let Some(limit) = self.config.max_ripples {
                if sim.arena.len() > limit {
                    warn!("Ripple spreading stopped at the ripple ceiling ({})", limit);
                    return Err(Error::ResourceExhausted {
                        resource: "ripple",
                        limit: limit as u64,
                    });
                }
            }
        }

        let paths = sim.extract();
        info!(
            "Found {} paths from {} to {} after {} ticks ({} ripples)",
            paths.len(),
            source,
            destination,
            sim.ticks,
            sim.arena.len()
        );

        Ok(KShortestPathResult {
            source,
            destination,
            k,
            outcome: PathOutcome::Found(paths),
            stats: sim.stats(),
        })
    }
}

/// A child ripple waiting to be admitted at the vertex its parent just reached
#[derive(Debug, Clone, Copy)]
struct Candidate<W> {
    parent: RippleId,
    /// How far the parent's wavefront got past the edge this tick
    leftover: W,
    edge_weight: W,
}

/// State of one ripple-spreading run.
///
/// Owns every ripple and the visit ledger for the duration of the run.
struct Simulation<'a, W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    index: &'a NeighborIndex<W>,
    speed: W,
    destination: usize,
    arena: RippleArena<W>,
    ledger: VisitLedger,
    /// Active ripples, oldest first
    active: Vec<RippleId>,
    /// Candidates per target vertex for the current tick
    incoming: Vec<Vec<Candidate<W>>>,
    /// Vertices with candidates this tick, in first-contact order
    touched: Vec<usize>,
    ticks: u64,
    peak_active: usize,
}

impl<'a, W> Simulation<'a, W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Seeds a single ripple at `source`
    fn new(index: &'a NeighborIndex<W>, speed: W, source: usize, destination: usize, k: usize) -> Self {
        let n = index.vertex_count();
        let mut arena = RippleArena::new();
        let mut ledger = VisitLedger::new(n, k);

        let seed = arena.seed(source);
        ledger.admit(source, seed);

        Simulation {
            index,
            speed,
            destination,
            arena,
            ledger,
            active: vec![seed],
            incoming: vec![Vec::new(); n],
            touched: Vec::new(),
            ticks: 0,
            peak_active: 1,
        }
    }

    fn is_complete(&self) -> bool {
        self.ledger.is_full(self.destination)
    }

    /// Advances the simulation by one tick.
    ///
    /// All contacts are detected before any ripple is admitted, and admission
    /// finishes before any ripple is deactivated.
    fn step(&mut self) {
        self.ticks += 1;
        self.expand_and_detect();
        let admitted = self.admit();
        self.peak_active = self.peak_active.max(self.active.len());
        let before = self.active.len();
        self.deactivate();

        trace!(
            "tick {}: admitted {}, deactivated {}, {} active",
            self.ticks,
            admitted,
            before - self.active.len(),
            self.active.len()
        );
    }

    /// Grows every active ripple and collects the edges crossed during this tick
    fn expand_and_detect(&mut self) {
        let speed = self.speed;
        for &id in &self.active {
            let radius = self.arena.expand(id, speed);
            let epicenter = self.arena.get(id).epicenter;

            for &(target, weight) in self.index.neighbors(epicenter) {
                if self.ledger.is_full(target) {
                    continue;
                }
                // Half-open window: each edge is crossed in exactly one tick
                if weight <= radius && radius < weight + speed {
                    if self.incoming[target].is_empty() {
                        self.touched.push(target);
                    }
                    self.incoming[target].push(Candidate {
                        parent: id,
                        leftover: radius - weight,
                        edge_weight: weight,
                    });
                }
            }
        }
    }

    /// Turns candidates into ripples, furthest-penetrating first, up to each
    /// vertex's remaining capacity. Returns how many were admitted.
    fn admit(&mut self) -> usize {
        let mut admitted = 0;
        let touched = std::mem::take(&mut self.touched);

        for &target in &touched {
            let mut candidates = std::mem::take(&mut self.incoming[target]);
            // Stable, so equal leftovers keep detection order
            candidates.sort_by(|a, b| b.leftover.cmp(&a.leftover));

            let room = self.ledger.remaining(target);
            for candidate in candidates.drain(..).take(room) {
                let id = self.arena.spawn(candidate.parent, target, candidate.leftover, candidate.edge_weight);
                self.ledger.admit(target, id);
                self.active.push(id);
                admitted += 1;
            }

            // Keep the allocation for later ticks
            candidates.clear();
            self.incoming[target] = candidates;
        }

        self.touched = touched;
        self.touched.clear();
        admitted
    }

    /// Drops ripples that have no uncrossed edge left towards a vertex with room
    fn deactivate(&mut self) {
        let index = self.index;
        let ledger = &self.ledger;
        let arena = &mut self.arena;

        self.active.retain(|&id| {
            let ripple = arena.get(id);
            let radius = ripple.radius;
            let alive = index
                .neighbors(ripple.epicenter)
                .iter()
                .any(|&(target, weight)| radius < weight && !ledger.is_full(target));
            if !alive {
                arena.deactivate(id);
            }
            alive
        });
    }

    /// Paths of the ripples admitted at the destination, in admission order
    fn extract(&self) -> Vec<RankedPath<W>> {
        self.ledger
            .ripples_at(self.destination)
            .iter()
            .enumerate()
            .map(|(i, &id)| RankedPath {
                rank: i + 1,
                path: self.arena.path_of(id),
                length: self.arena.get(id).length,
            })
            .collect()
    }

    fn stats(&self) -> SimulationStats {
        SimulationStats {
            ticks: self.ticks,
            ripples_created: self.arena.len(),
            peak_active: self.peak_active,
            speed: self.speed.to_f64().unwrap_or(0.0),
        }
    }
}
