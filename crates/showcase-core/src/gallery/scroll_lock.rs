//! Page-wide "no background scroll" flag, held while a detail overlay is open

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared handle to the page scroll lock.
///
/// Cloning shares the same lock. Readers call [`ScrollLock::is_engaged`];
/// only the modal controller can acquire it.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one guard is alive
    pub fn is_engaged(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }

    pub(crate) fn acquire(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::AcqRel);
        if previous == 0 {
            tracing::debug!("Scroll lock engaged");
        }
        ScrollLockGuard { lock: self.clone() }
    }
}

/// Keeps the lock engaged until dropped
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.lock.holders.fetch_sub(1, Ordering::AcqRel);
        if previous == 1 {
            tracing::debug!("Scroll lock released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = ScrollLock::new();
        assert!(!lock.is_engaged());
        let guard = lock.acquire();
        assert!(lock.is_engaged());
        drop(guard);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn test_lock_held_until_last_guard() {
        let lock = ScrollLock::new();
        let a = lock.acquire();
        let b = lock.clone().acquire();
        drop(a);
        assert!(lock.is_engaged());
        drop(b);
        assert!(!lock.is_engaged());
    }
}
