//! Reference-counted page scroll lock.
//!
//! Every open drawer holds a [`ScrollLockGuard`]. The target is locked when
//! the first guard is taken and unlocked when the last one is dropped, so
//! overlapping holders never unlock each other early and a holder that is
//! torn down without closing still releases its share.

use std::{cell::Cell, fmt, rc::Rc};

/// Something that can stop the page from scrolling.
pub trait ScrollLockTarget {
    /// Apply the lock.
    fn lock(&self);

    /// Revert whatever [`lock`](Self::lock) applied.
    fn unlock(&self);
}

struct LockInner<T: ScrollLockTarget> {
    target: T,
    holders: Cell<usize>,
}

/// Shared scroll lock. Clones refer to the same lock.
pub struct ScrollLock<T: ScrollLockTarget> {
    inner: Rc<LockInner<T>>,
}

impl<T: ScrollLockTarget> ScrollLock<T> {
    /// Create an unlocked scroll lock over `target`.
    pub fn new(target: T) -> Self {
        Self {
            inner: Rc::new(LockInner {
                target,
                holders: Cell::new(0),
            }),
        }
    }

    /// Take a share of the lock. The page stays locked while any guard lives.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard<T> {
        let holders = self.inner.holders.get();
        if holders == 0 {
            self.inner.target.lock();
        }
        self.inner.holders.set(holders + 1);
        ScrollLockGuard {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.inner.holders.get() > 0
    }

    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }

    pub fn target(&self) -> &T {
        &self.inner.target
    }
}

impl<T: ScrollLockTarget> Clone for ScrollLock<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: ScrollLockTarget> fmt::Debug for ScrollLock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.inner.holders.get())
            .finish()
    }
}

/// One holder's share of a [`ScrollLock`].
pub struct ScrollLockGuard<T: ScrollLockTarget> {
    inner: Rc<LockInner<T>>,
}

impl<T: ScrollLockTarget> Drop for ScrollLockGuard<T> {
    fn drop(&mut self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            self.inner.target.unlock();
        }
    }
}

impl<T: ScrollLockTarget> fmt::Debug for ScrollLockGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("holders", &self.inner.holders.get())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::{testing::RecordingTarget, *};

    #[test]
    fn test_single_guard() {
        let lock = ScrollLock::new(RecordingTarget::default());
        assert!(!lock.is_locked());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert!(lock.target().locked.get());

        drop(guard);
        assert!(!lock.is_locked());
        assert!(!lock.target().locked.get());
        assert_eq!(lock.target().locks.get(), 1);
        assert_eq!(lock.target().unlocks.get(), 1);
    }

    #[test]
    fn test_overlapping_guards_unlock_once() {
        let lock = ScrollLock::new(RecordingTarget::default());
        let first = lock.acquire();
        let second = lock.clone().acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(lock.target().locked.get(), "second holder keeps the page locked");

        drop(second);
        assert!(!lock.target().locked.get());
        assert_eq!(lock.target().locks.get(), 1);
        assert_eq!(lock.target().unlocks.get(), 1);
    }

    #[test]
    fn test_repeated_cycles_are_idempotent() {
        let lock = ScrollLock::new(RecordingTarget::default());
        for _ in 0..5 {
            let guard = lock.acquire();
            assert!(lock.target().locked.get());
            drop(guard);
            assert!(!lock.target().locked.get());
        }
        assert_eq!(lock.target().locks.get(), 5);
        assert_eq!(lock.target().unlocks.get(), 5);
    }

    #[test]
    fn test_guard_outlives_lock_handle() {
        let lock = ScrollLock::new(RecordingTarget::default());
        let observer = lock.clone();
        let guard = lock.acquire();
        drop(lock);
        assert!(observer.is_locked());
        drop(guard);
        assert!(!observer.is_locked());
    }
}
