//! Query Engine: stateless range and neighbor-window slicing over a
//! published Ranking View.

use crate::core::ranking::{RankedCustomer, RankingView};
use crate::error::{CoreError, CoreResult};

/// Ranks `start..=end` (1-based, inclusive). Out-of-range ends clamp
/// silently; `start` beyond the last rank returns an empty list.
pub fn range(view: &RankingView, start: u64, end: u64) -> CoreResult<Vec<RankedCustomer>> {
    if start < 1 || end < start {
        return Err(CoreError::BadArgument {
            reason: format!("invalid range: start={start}, end={end}"),
        });
    }

    let len = view.len() as u64;
    if start > len {
        return Ok(Vec::new());
    }

    let start_idx = (start - 1) as usize;
    let end_idx = end.min(len) as usize; // exclusive upper bound into entries()
    Ok(view.entries()[start_idx..end_idx].to_vec())
}

/// `high` predecessors (better, numerically smaller rank) through `low`
/// successors (worse rank) around `id`, inclusive of `id` itself. Empty if
/// `id` is not currently ranked (absent from the store, or score <= 0).
pub fn neighbors(
    view: &RankingView,
    id: i64,
    high: i64,
    low: i64,
) -> CoreResult<Vec<RankedCustomer>> {
    if high < 0 || low < 0 {
        return Err(CoreError::BadArgument {
            reason: format!("negative neighbor count: high={high}, low={low}"),
        });
    }

    let Some(pos) = view.position_of(id) else {
        return Ok(Vec::new());
    };

    let rank = (pos + 1) as u64;
    let high = high as u64;
    let low = low as u64;

    let start = rank.saturating_sub(high).max(1);
    let end = rank.saturating_add(low).min(view.len() as u64);

    Ok(view.entries()[(start - 1) as usize..end as usize].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::customer::CustomerStore;

    fn view_with(scores: &[(i64, i64)]) -> RankingView {
        let store = CustomerStore::new(4);
        for &(id, delta) in scores {
            store.apply_delta(id, delta.into()).unwrap();
        }
        RankingView::build(&store)
    }

    #[test]
    fn range_clamps_silently_at_the_end() {
        let view = view_with(&[(1, 10), (2, 20), (3, 30)]);
        let got = range(&view, 2, 100).unwrap();
        let ranks: Vec<u32> = got.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![2, 3]);
    }

    #[test]
    fn range_beyond_last_rank_is_empty() {
        let view = view_with(&[(1, 10), (2, 20), (3, 30)]);
        assert!(range(&view, 100, 200).unwrap().is_empty());
    }

    #[test]
    fn range_rejects_bad_bounds() {
        let view = view_with(&[(1, 10)]);
        assert!(matches!(
            range(&view, 0, 5),
            Err(CoreError::BadArgument { .. })
        ));
        assert!(matches!(
            range(&view, 5, 2),
            Err(CoreError::BadArgument { .. })
        ));
    }

    #[test]
    fn neighbors_window_counts_high_as_better_rank() {
        let view = view_with(&[(1, 10), (2, 20), (3, 30), (4, 40), (5, 50)]);
        let got = neighbors(&view, 3, 1, 2).unwrap();
        let ids: Vec<i64> = got.iter().map(|e| e.customer_id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn neighbors_target_alone_at_zero_zero() {
        let view = view_with(&[(1, 10), (2, 20), (3, 30)]);
        let got = neighbors(&view, 2, 0, 0).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].customer_id, 2);
    }

    #[test]
    fn neighbors_clamp_at_both_edges() {
        let view = view_with(&[(1, 10), (2, 20), (3, 30)]);
        let got = neighbors(&view, 1, 5, 5).unwrap();
        assert_eq!(got.len(), 3);
    }

    #[test]
    fn neighbors_unranked_id_is_empty() {
        let view = view_with(&[(1, 10)]);
        assert!(neighbors(&view, 999, 5, 5).unwrap().is_empty());

        let store = CustomerStore::new(4);
        store.apply_delta(1, 50.into()).unwrap();
        store.apply_delta(1, (-50).into()).unwrap();
        let view = RankingView::build(&store);
        assert!(neighbors(&view, 1, 5, 5).unwrap().is_empty());
    }

    #[test]
    fn neighbors_rejects_negative_counts() {
        let view = view_with(&[(1, 10)]);
        assert!(matches!(
            neighbors(&view, 1, -1, 0),
            Err(CoreError::BadArgument { .. })
        ));
    }

    #[test]
    fn neighbors_respect_at_most_one_plus_high_plus_low() {
        let view = view_with(&[(1, 10), (2, 20), (3, 30), (4, 40), (5, 50)]);
        let got = neighbors(&view, 3, 10, 10).unwrap();
        assert!(got.len() <= 1 + 10 + 10);
        assert_eq!(got.len(), 5);
        let ranks: Vec<u32> = got.iter().map(|e| e.rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }
}
