//! `Leaderboard`: the facade gluing the Customer Store, the Coherence
//! Controller, and the Query Engine into the three operations the
//! transport layer calls.

use rust_decimal::Decimal;

use crate::core::coherence::CoherenceController;
use crate::core::customer::CustomerStore;
use crate::core::query;
use crate::core::ranking::RankedCustomer;
use crate::error::CoreResult;

pub struct Leaderboard {
    store: CustomerStore,
    coherence: CoherenceController,
}

impl Leaderboard {
    pub fn new(shard_count: usize) -> Self {
        Self {
            store: CustomerStore::new(shard_count),
            coherence: CoherenceController::new(),
        }
    }

    /// Apply a signed delta to `id`'s score, returning the resulting score.
    pub fn apply_delta(&self, id: i64, delta: Decimal) -> CoreResult<Decimal> {
        let new_score = self.store.apply_delta(id, delta)?;
        self.coherence.note_update();
        Ok(new_score)
    }

    /// Ranks `start..=end`, 1-based inclusive.
    pub fn range(&self, start: u64, end: u64) -> CoreResult<Vec<RankedCustomer>> {
        let view = self.coherence.get_view(&self.store);
        query::range(&view, start, end)
    }

    /// `high` predecessors through `low` successors around `id`.
    pub fn neighbors(&self, id: i64, high: i64, low: i64) -> CoreResult<Vec<RankedCustomer>> {
        let view = self.coherence.get_view(&self.store);
        query::neighbors(&view, id, high, low)
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(crate::core::customer::DEFAULT_SHARD_COUNT)
    }
}
