//! Customer Store: the primary `customer_id -> score` mapping.
//!
//! Sharded so that updates to distinct customers never serialize against
//! each other; each shard is a `parking_lot::Mutex<HashMap<..>>` guarding
//! its own slice of the id space, the same sharded-lock shape the wider
//! codebase uses for other hot-path state.

use std::collections::HashMap;

use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};

/// Deltas must fall within this inclusive range or `apply_delta` rejects them.
pub const MIN_DELTA: Decimal = Decimal::from_parts(1000, 0, 0, true, 0);
pub const MAX_DELTA: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

pub(crate) const DEFAULT_SHARD_COUNT: usize = 16;

/// Concurrent `customer_id -> score` map, sharded by id to bound contention.
pub struct CustomerStore {
    shards: Vec<Mutex<HashMap<i64, Decimal>>>,
}

impl CustomerStore {
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        let mut shards = Vec::with_capacity(shard_count);
        shards.resize_with(shard_count, || Mutex::new(HashMap::new()));
        Self { shards }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard_for(&self, id: i64) -> &Mutex<HashMap<i64, Decimal>> {
        let idx = (id.unsigned_abs() as usize) % self.shards.len();
        &self.shards[idx]
    }

    /// Insert-or-update `id`'s score by `delta`, returning the resulting score.
    ///
    /// The read-modify-write for a single `id` is linearizable: it happens
    /// entirely under that id's shard lock.
    pub fn apply_delta(&self, id: i64, delta: Decimal) -> CoreResult<Decimal> {
        if id <= 0 {
            return Err(CoreError::BadArgument {
                reason: format!("customer id {id} must be a positive integer"),
            });
        }
        if delta < MIN_DELTA || delta > MAX_DELTA {
            return Err(CoreError::OutOfRange { delta });
        }

        let mut shard = self.shard_for(id).lock();
        let score = shard.entry(id).or_insert(Decimal::ZERO);
        *score += delta;
        Ok(*score)
    }

    /// Current score for `id`, if it has ever been updated.
    pub fn get(&self, id: i64) -> Option<Decimal> {
        self.shard_for(id).lock().get(&id).copied()
    }

    /// Snapshot every `(customer_id, score)` pair in the store.
    ///
    /// Each shard is locked once, drained into the output, and released
    /// before the next shard is visited — no shard lock is ever held while
    /// this call is waiting on another lock, per the rebuild lock order.
    pub fn snapshot(&self) -> Vec<(i64, Decimal)> {
        let mut out = Vec::new();
        for shard in &self.shards {
            let guard = shard.lock();
            out.extend(guard.iter().map(|(&id, &score)| (id, score)));
        }
        out
    }
}

impl Default for CustomerStore {
    fn default() -> Self {
        Self::new(DEFAULT_SHARD_COUNT)
    }
}
