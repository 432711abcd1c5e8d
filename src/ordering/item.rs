//! Item-level helpers over [`assign`](super::assign).

use std::cmp::Ordering;

use super::assign::assign;
use super::error::RenumberRequired;
use super::key::OrderKey;

/// An item that lives in an ordered group.
pub trait Orderable {
    /// Numeric key type the group is ordered by.
    type Key: OrderKey;
    /// Identity used to find the item inside a group.
    type Id: PartialEq + ?Sized;

    fn order_key(&self) -> Self::Key;

    fn item_id(&self) -> &Self::Id;

    /// Stable secondary ordering for items whose keys compare equal.
    fn tie_break(&self, other: &Self) -> Ordering;
}

/// Where a moved item ends up.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<G, K> {
    pub group: G,
    pub order: K,
}

/// Total order of two items within a group.
#[must_use]
pub fn compare<T: Orderable>(a: &T, b: &T) -> Ordering {
    a.order_key()
        .total_cmp(&b.order_key())
        .then_with(|| a.tie_break(b))
}

/// Sort a group into its iteration order.
pub fn sort_group<T: Orderable>(items: &mut [T]) {
    items.sort_by(compare);
}

/// [`assign`] over items that are already sorted with [`sort_group`].
///
/// # Errors
///
/// Returns [`RenumberRequired`] when no key fits at `target_index`.
pub fn assign_in<T: Orderable>(
    items: &[T],
    target_index: usize,
    gap: T::Key,
) -> Result<T::Key, RenumberRequired> {
    let keys: Vec<T::Key> = items.iter().map(Orderable::order_key).collect();
    assign(&keys, target_index, gap)
}

/// Place `item` at `target_index` of the `group` whose sorted contents are
/// `destination`.
///
/// If `item` is already in `destination` (a reorder within its own group) it
/// is skipped, so `target_index` counts as if it had been removed first. The
/// source group is not touched.
///
/// # Errors
///
/// Returns [`RenumberRequired`] when the destination has no room at
/// `target_index`.
pub fn move_to_group<T: Orderable, G>(
    item: &T,
    group: G,
    destination: &[T],
    target_index: usize,
    gap: T::Key,
) -> Result<Placement<G, T::Key>, RenumberRequired> {
    let keys: Vec<T::Key> = destination
        .iter()
        .filter(|other| other.item_id() != item.item_id())
        .map(Orderable::order_key)
        .collect();
    let order = assign(&keys, target_index, gap)?;
    Ok(Placement { group, order })
}
