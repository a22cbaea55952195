//! `PendingIncrements` — pheromone deltas queued during a round.

use rustc_hash::FxHashMap;

use crate::EdgeKey;

/// Accumulated, not-yet-applied pheromone increments keyed by edge.
///
/// Empty outside the queue-then-commit window of a round.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PendingIncrements {
    inner: FxHashMap<EdgeKey, u64>,
}

impl PendingIncrements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the pending total for `edge`.  Zero amounts are
    /// dropped so an idle round leaves the buffer empty.
    #[inline]
    pub fn queue(&mut self, edge: EdgeKey, amount: u64) {
        if amount == 0 {
            return;
        }
        let slot = self.inner.entry(edge).or_insert(0);
        *slot = slot.saturating_add(amount);
    }

    /// Pending total for `edge` (0 when nothing is queued).
    #[inline]
    pub fn get(&self, edge: EdgeKey) -> u64 {
        self.inner.get(&edge).copied().unwrap_or(0)
    }

    /// Fold another buffer into this one.  Addition commutes, so merge order
    /// never changes the result.
    pub fn merge(&mut self, other: PendingIncrements) {
        for (edge, amount) in other.inner {
            self.queue(edge, amount);
        }
    }

    /// Remove and return every pending `(edge, amount)` pair.
    pub fn drain(&mut self) -> impl Iterator<Item = (EdgeKey, u64)> + '_ {
        self.inner.drain()
    }

    /// Number of distinct edges with a pending increment.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
