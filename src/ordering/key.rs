//! Numeric key spaces an order key can live in.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A numeric order key.
///
/// Every step returns `None` instead of a value that would collide with, or
/// fail to sort strictly relative to, the key it was derived from.
pub trait OrderKey: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Key one gap below `self`.
    fn before(self, gap: Self) -> Option<Self>;

    /// Key one gap above `self`.
    fn after(self, gap: Self) -> Option<Self>;

    /// Key strictly between `self` and `upper`.
    fn between(self, upper: Self) -> Option<Self>;

    /// The key in slot `index` of an evenly spaced layout: `(index + 1) * gap`.
    fn nth(index: usize, gap: Self) -> Option<Self>;

    /// Total order over keys, including values `PartialOrd` cannot compare.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Whether `gap` can separate keys at all.
    fn is_valid_gap(gap: Self) -> bool;
}

impl OrderKey for f64 {
    fn before(self, gap: Self) -> Option<Self> {
        let key = self - gap;
        (key.is_finite() && key < self).then_some(key)
    }

    fn after(self, gap: Self) -> Option<Self> {
        let key = self + gap;
        (key.is_finite() && key > self).then_some(key)
    }

    fn between(self, upper: Self) -> Option<Self> {
        if self.partial_cmp(&upper) != Some(Ordering::Less) {
            return None;
        }
        let mid = self + (upper - self) / 2.0;
        (mid.is_finite() && self < mid && mid < upper).then_some(mid)
    }

    #[allow(clippy::cast_precision_loss)]
    fn nth(index: usize, gap: Self) -> Option<Self> {
        let key = (index as f64 + 1.0) * gap;
        key.is_finite().then_some(key)
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    fn is_valid_gap(gap: Self) -> bool {
        gap.is_finite() && gap > 0.0
    }
}

impl OrderKey for i64 {
    fn before(self, gap: Self) -> Option<Self> {
        let key = self.checked_sub(gap)?;
        (key < self).then_some(key)
    }

    fn after(self, gap: Self) -> Option<Self> {
        let key = self.checked_add(gap)?;
        (key > self).then_some(key)
    }

    fn between(self, upper: Self) -> Option<Self> {
        let span = upper.checked_sub(self)?;
        if span < 2 {
            return None;
        }
        self.checked_add(span.checked_div(2)?)
    }

    fn nth(index: usize, gap: Self) -> Option<Self> {
        i64::try_from(index).ok()?.checked_add(1)?.checked_mul(gap)
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn is_valid_gap(gap: Self) -> bool {
        gap > 0
    }
}
