//! The contended lock pair backing the deadlock scenario.

use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

/// Two independent process-wide locks, dedicated solely to the deadlock
/// scenario and never reused by any other component.
///
/// They guard no data; two threads acquiring them in opposite orders is
/// their entire purpose. Sharing them with anything else would corrupt the
/// determinism of the reproduction.
#[derive(Debug, Default)]
pub struct LockPair {
    a: Mutex<()>,
    b: Mutex<()>,
}

impl LockPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until lock A is held.
    pub fn lock_a(&self) -> MutexGuard<'_, ()> {
        self.a.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until lock B is held.
    pub fn lock_b(&self) -> MutexGuard<'_, ()> {
        self.b.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Non-blocking probe of lock A; `None` while another thread holds it.
    pub fn try_lock_a(&self) -> Option<MutexGuard<'_, ()>> {
        match self.a.try_lock() {
            Ok(guard) => Some(guard),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => None,
        }
    }

    /// Non-blocking probe of lock B; `None` while another thread holds it.
    pub fn try_lock_b(&self) -> Option<MutexGuard<'_, ()>> {
        match self.b.try_lock() {
            Ok(guard) => Some(guard),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locks_are_independent() {
        let locks = LockPair::new();
        let _a = locks.lock_a();
        // holding A does not affect B
        assert!(locks.try_lock_b().is_some());
        assert!(locks.try_lock_a().is_none());
    }

    #[test]
    fn test_try_lock_released_on_guard_drop() {
        let locks = LockPair::new();
        {
            let _b = locks.lock_b();
            assert!(locks.try_lock_b().is_none());
        }
        assert!(locks.try_lock_b().is_some());
    }
}
