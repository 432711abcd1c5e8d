//! Per-column async mutexes.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lazily created mutex per status column.
///
/// Every reorder, insert and renumber of a column runs while holding that
/// column's lock. Two columns are always locked in name order.
#[derive(Debug, Default)]
pub struct GroupLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

/// Held column locks. Dropping it releases them.
#[derive(Debug)]
pub struct GroupGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl GroupLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn handle(&self, group: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        Arc::clone(locks.entry(group.to_string()).or_default())
    }

    /// Lock a single column.
    pub async fn lock(&self, group: &str) -> GroupGuard {
        let guard = self.handle(group).await.lock_owned().await;
        GroupGuard {
            _guards: vec![guard],
        }
    }

    /// Lock two columns, or one if they are the same.
    pub async fn lock_pair(&self, a: &str, b: &str) -> GroupGuard {
        if a == b {
            return self.lock(a).await;
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        let first = self.handle(first).await.lock_owned().await;
        let second = self.handle(second).await.lock_owned().await;
        GroupGuard {
            _guards: vec![first, second],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_lock_excludes_same_group() {
        let locks = GroupLocks::new();
        let held = locks.lock("backlog").await;

        let blocked = timeout(Duration::from_millis(50), locks.lock("backlog")).await;
        assert!(blocked.is_err());

        drop(held);
        let acquired = timeout(Duration::from_millis(500), locks.lock("backlog")).await;
        assert!(acquired.is_ok());
    }

    #[tokio::test]
    async fn test_other_groups_are_independent() {
        let locks = GroupLocks::new();
        let _held = locks.lock("backlog").await;
        let other = timeout(Duration::from_millis(500), locks.lock("completed")).await;
        assert!(other.is_ok());
    }

    #[tokio::test]
    async fn test_lock_pair_same_group_does_not_deadlock() {
        let locks = GroupLocks::new();
        let pair = timeout(Duration::from_millis(500), locks.lock_pair("a", "a")).await;
        assert!(pair.is_ok());
    }

    #[tokio::test]
    async fn test_lock_pair_in_opposite_orders() {
        let locks = Arc::new(GroupLocks::new());
        let mut handles = Vec::new();
        for i in 0..20 {
            let locks = Arc::clone(&locks);
            handles.push(tokio::spawn(async move {
                let _guard = if i % 2 == 0 {
                    locks.lock_pair("backlog", "completed").await
                } else {
                    locks.lock_pair("completed", "backlog").await
                };
                tokio::task::yield_now().await;
            }));
        }
        for handle in handles {
            timeout(Duration::from_secs(5), handle)
                .await
                .expect("lock_pair deadlocked")
                .unwrap();
        }
    }
}
