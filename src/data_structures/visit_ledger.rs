use crate::data_structures::RippleId;

/// Per-vertex record of the ripples generated at each vertex (omega).
///
/// Every vertex accepts at most `capacity` ripples. Entries are kept in admission
/// order and are never removed.
#[derive(Debug, Clone)]
pub struct VisitLedger {
    entries: Vec<Vec<RippleId>>,
    capacity: usize,
}

impl VisitLedger {
    /// Creates an empty ledger for `vertex_count` vertices, `capacity` ripples each
    pub fn new(vertex_count: usize, capacity: usize) -> Self {
        VisitLedger {
            entries: vec![Vec::new(); vertex_count],
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of ripples admitted at `vertex`
    pub fn len(&self, vertex: usize) -> usize {
        self.entries[vertex].len()
    }

    /// Free slots left at `vertex`
    pub fn remaining(&self, vertex: usize) -> usize {
        self.capacity - self.entries[vertex].len()
    }

    pub fn is_full(&self, vertex: usize) -> bool {
        self.entries[vertex].len() >= self.capacity
    }

    /// Registers `ripple` at `vertex`. Returns false, leaving the ledger untouched,
    /// when the vertex is already at capacity.
    pub fn admit(&mut self, vertex: usize, ripple: RippleId) -> bool {
        if self.is_full(vertex) {
            return false;
        }
        self.entries[vertex].push(ripple);
        true
    }

    /// Ripples admitted at `vertex`, in admission order
    pub fn ripples_at(&self, vertex: usize) -> &[RippleId] {
        &self.entries[vertex]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_enforced() {
        let mut ledger = VisitLedger::new(3, 2);
        assert!(ledger.admit(1, RippleId(0)));
        assert_eq!(ledger.remaining(1), 1);
        assert!(ledger.admit(1, RippleId(4)));
        assert!(ledger.is_full(1));
        assert!(!ledger.admit(1, RippleId(9)));

        assert_eq!(ledger.len(1), 2);
        assert_eq!(ledger.ripples_at(1), &[RippleId(0), RippleId(4)]);
        assert_eq!(ledger.len(0), 0);
        assert!(!ledger.is_full(2));
    }
}
