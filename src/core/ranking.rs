//! Ranking View: the derived, totally-ordered snapshot of eligible customers.

use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::customer::CustomerStore;

/// A customer as it appears in a published ranking, with its assigned rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCustomer {
    pub customer_id: i64,
    pub score: Decimal,
    pub rank: u32,
}

/// An immutable, totally-ordered snapshot of every customer with `score > 0`.
///
/// Order: `score` descending, `customer_id` ascending on ties. Ranks are the
/// dense 1-based positions in that order. Never mutated after construction;
/// an index from `customer_id` to position makes neighbor lookups O(1).
#[derive(Debug)]
pub struct RankingView {
    entries: Vec<RankedCustomer>,
    index: HashMap<i64, usize>,
}

impl RankingView {
    /// Enumerate the store, keep `score > 0`, sort by `(-score, customer_id)`,
    /// and assign dense 1-based ranks.
    pub fn build(store: &CustomerStore) -> Self {
        let mut eligible: Vec<(i64, Decimal)> = store
            .snapshot()
            .into_iter()
            .filter(|&(_, score)| score > Decimal::ZERO)
            .collect();

        eligible.sort_by(|(id_a, score_a), (id_b, score_b)| {
            match score_b.cmp(score_a) {
                Ordering::Equal => id_a.cmp(id_b),
                ord => ord,
            }
        });

        let mut entries = Vec::with_capacity(eligible.len());
        let mut index = HashMap::with_capacity(eligible.len());
        for (pos, (customer_id, score)) in eligible.into_iter().enumerate() {
            let rank = (pos + 1) as u32;
            index.insert(customer_id, pos);
            entries.push(RankedCustomer {
                customer_id,
                score,
                rank,
            });
        }

        Self { entries, index }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RankedCustomer] {
        &self.entries
    }

    /// 0-based position of `id` in `entries`, if it is currently ranked.
    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.index.get(&id).copied()
    }
}
