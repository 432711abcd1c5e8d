use std::cmp::Ordering;

use super::error::KeySpaceExhausted;
use super::item::Orderable;
use super::key::OrderKey;

/// Evenly spaced keys for `count` items: `gap, 2 * gap, ..., count * gap`.
///
/// # Errors
///
/// Returns [`KeySpaceExhausted`] if the layout cannot be represented with
/// strictly increasing keys.
pub fn renumber<K: OrderKey>(count: usize, gap: K) -> Result<Vec<K>, KeySpaceExhausted> {
    if !K::is_valid_gap(gap) {
        return Err(KeySpaceExhausted { count });
    }
    let keys = (0..count)
        .map(|i| K::nth(i, gap))
        .collect::<Option<Vec<K>>>()
        .ok_or(KeySpaceExhausted { count })?;
    if is_strictly_increasing(&keys) {
        Ok(keys)
    } else {
        Err(KeySpaceExhausted { count })
    }
}

/// Fresh keys for `items`, which must already be in their group's order.
/// The returned keys line up with `items` index for index.
pub fn renumber_items<T: Orderable>(
    items: &[T],
    gap: T::Key,
) -> Result<Vec<T::Key>, KeySpaceExhausted> {
    renumber(items.len(), gap)
}

/// Whether every key sorts strictly after the one before it.
#[must_use]
pub fn is_strictly_increasing<K: OrderKey>(keys: &[K]) -> bool {
    keys.windows(2).all(|pair| match pair {
        [a, b] => a.total_cmp(b) == Ordering::Less,
        _ => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renumber_multiples_of_gap() {
        assert_eq!(renumber(3, 1000.0), Ok(vec![1000.0, 2000.0, 3000.0]));
        assert_eq!(renumber(4, 10_i64), Ok(vec![10, 20, 30, 40]));
    }

    #[test]
    fn test_renumber_empty() {
        assert_eq!(renumber::<f64>(0, 1000.0), Ok(vec![]));
    }

    #[test]
    fn test_renumber_rejects_invalid_gap() {
        assert_eq!(renumber(2, 0_i64), Err(KeySpaceExhausted { count: 2 }));
        assert_eq!(renumber(2, f64::NAN), Err(KeySpaceExhausted { count: 2 }));
    }

    #[test]
    fn test_renumber_integer_overflow() {
        assert_eq!(
            renumber(3, i64::MAX / 2),
            Err(KeySpaceExhausted { count: 3 })
        );
    }

    #[test]
    fn test_strictly_increasing() {
        assert!(is_strictly_increasing::<f64>(&[]));
        assert!(is_strictly_increasing(&[1.0]));
        assert!(is_strictly_increasing(&[1.0, 1.5, 2.0]));
        assert!(!is_strictly_increasing(&[1.0, 1.0]));
        assert!(!is_strictly_increasing(&[2_i64, 1]));
    }
}
