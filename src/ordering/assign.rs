use std::cmp::Ordering;

use super::error::{Exhaustion, RenumberRequired};
use super::key::OrderKey;

/// Default spacing between neighbouring keys.
pub const DEFAULT_GAP: f64 = 1000.0;

/// Compute the order key for an item landing at `target_index`.
///
/// `keys` are the keys of the destination group in ascending order, with the
/// moved item already removed. An index past the end is treated as the tail.
///
/// - empty group: `gap`, the first slot of an evenly spaced layout
/// - index 0: one gap before the head
/// - index `len`: one gap after the tail
/// - otherwise: the midpoint of the two neighbours
///
/// # Errors
///
/// Returns [`RenumberRequired`] when the result would not sort strictly between
/// its neighbours.
pub fn assign<K: OrderKey>(keys: &[K], target_index: usize, gap: K) -> Result<K, RenumberRequired> {
    let index = target_index.min(keys.len());
    let exhausted = |reason| RenumberRequired { index, reason };

    let lower = index.checked_sub(1).and_then(|i| keys.get(i)).copied();
    let upper = keys.get(index).copied();

    match (lower, upper) {
        (None, None) => Ok(gap),
        (None, Some(head)) => head.before(gap).ok_or(exhausted(Exhaustion::Overflow)),
        (Some(tail), None) => tail.after(gap).ok_or(exhausted(Exhaustion::Overflow)),
        (Some(lo), Some(hi)) => {
            if lo.total_cmp(&hi) != Ordering::Less {
                return Err(exhausted(Exhaustion::Unordered));
            }
            lo.between(hi).ok_or(exhausted(Exhaustion::Precision))
        }
    }
}
