use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Index of a ripple inside a [`RippleArena`]. Assigned once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RippleId(pub usize);

/// A simulated wavefront spreading out of its epicenter.
///
/// The path is not stored directly. A ripple only knows the ripple that spawned it,
/// so the path is its parent's path followed by its own epicenter.
#[derive(Debug, Clone)]
pub struct Ripple<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Vertex the ripple spreads from
    pub epicenter: usize,
    /// Distance travelled from the epicenter
    pub radius: W,
    /// Total weight of the path from the source to the epicenter
    pub length: W,
    /// Ripple whose contact produced this one; `None` for the seed
    pub parent: Option<RippleId>,
    /// Path length in vertices, source and epicenter included
    pub hops: usize,
    /// Cleared once, when the ripple can no longer produce contacts
    pub active: bool,
}

/// Contiguous storage for every ripple created during one run.
///
/// Records outlive their activity so that paths can be rebuilt after the
/// simulation finishes.
#[derive(Debug, Clone)]
pub struct RippleArena<W>
where
    W: Float + Zero + Debug + Copy,
{
    ripples: Vec<Ripple<W>>,
}

impl<W> Default for RippleArena<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> RippleArena<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty arena
    pub fn new() -> Self {
        RippleArena { ripples: Vec::new() }
    }

    /// Creates the seed ripple at `source` with zero radius and zero length
    pub fn seed(&mut self, source: usize) -> RippleId {
        self.push(Ripple {
            epicenter: source,
            radius: W::zero(),
            length: W::zero(),
            parent: None,
            hops: 1,
            active: true,
        })
    }

    /// Creates a child of `parent` that has just crossed an edge of weight
    /// `edge_weight` into `epicenter`, carrying `leftover` radius past it
    pub fn spawn(&mut self, parent: RippleId, epicenter: usize, leftover: W, edge_weight: W) -> RippleId {
        let (length, hops) = {
            let p = &self.ripples[parent.0];
            (p.length + edge_weight, p.hops + 1)
        };
        self.push(Ripple {
            epicenter,
            radius: leftover,
            length,
            parent: Some(parent),
            hops,
            active: true,
        })
    }

    fn push(&mut self, ripple: Ripple<W>) -> RippleId {
        let id = RippleId(self.ripples.len());
        self.ripples.push(ripple);
        id
    }

    /// Number of ripples ever created
    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    /// Returns true if no ripple has been created
    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn get(&self, id: RippleId) -> &Ripple<W> {
        &self.ripples[id.0]
    }

    /// Grows the radius of a ripple by `delta`
    pub fn expand(&mut self, id: RippleId, delta: W) -> W {
        let ripple = &mut self.ripples[id.0];
        ripple.radius = ripple.radius + delta;
        ripple.radius
    }

    /// Marks a ripple inactive. There is no way back.
    pub fn deactivate(&mut self, id: RippleId) {
        self.ripples[id.0].active = false;
    }

    /// Materializes the path of a ripple, from the source to its epicenter
    pub fn path_of(&self, id: RippleId) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.get(id).hops);
        let mut current = Some(id);
        while let Some(rid) = current {
            let ripple = self.get(rid);
            path.push(ripple.epicenter);
            current = ripple.parent;
        }
        path.reverse();
        path
    }
}
