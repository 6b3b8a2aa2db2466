use num_traits::{Float, Zero};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(vertex, distance)` pairs for Dijkstra-style searches.
///
/// Ties on distance pop the smaller vertex ID first.
#[derive(Debug)]
pub struct DistanceQueue<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    heap: BinaryHeap<Reverse<(W, usize)>>,
}

impl<W> Default for DistanceQueue<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DistanceQueue<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `vertex` at tentative `distance`
    pub fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes the vertex with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap.pop().map(|Reverse((distance, vertex))| (vertex, distance))
    }
}
