//! Process-wide transaction cache, the allocation target for the memory
//! scenarios.

use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

/// An opaque record held by the transaction cache.
///
/// Carries a single randomly generated identifying token and nothing else;
/// its job is to occupy heap memory until the storage holding it is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    token: String,
}

impl Record {
    /// Create a record with a fresh random token.
    pub fn generate() -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Append-only store of records, shared by every scenario invocation in the
/// process.
///
/// Insertion order is preserved, nothing is deduplicated, and size is
/// unbounded until [`clear`](Self::clear) swaps the storage out. Inserts and
/// clears serialize behind a single writer lock so concurrent activations
/// cannot race on the storage handle; correctness, not throughput, is the
/// goal here.
///
/// Nothing resets this cache between invocations. Callers accumulate state
/// across calls by design.
#[derive(Debug, Default)]
pub struct TransactionCache {
    records: Mutex<Vec<Record>>,
}

impl TransactionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Never rejects, never deduplicates. Amortized O(1).
    pub fn insert(&self, record: Record) {
        self.storage().push(record);
    }

    /// Atomically replace the underlying storage with an empty one and
    /// return the old storage.
    ///
    /// The caller decides when to drop the returned records, which controls
    /// how sharp the release edge looks to a memory profiler.
    #[must_use = "dropping the returned storage is what releases the memory"]
    pub fn clear(&self) -> Vec<Record> {
        std::mem::take(&mut *self.storage())
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.storage().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock only means a scenario thread panicked mid-mutation;
    // the surviving records are still the artifact under observation.
    fn storage(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order_and_duplicates() {
        let cache = TransactionCache::new();
        let first = Record::generate();
        let second = Record::generate();

        cache.insert(first.clone());
        cache.insert(second.clone());
        cache.insert(first.clone());

        assert_eq!(cache.len(), 3);
        let records = cache.clear();
        assert_eq!(records, vec![first.clone(), second, first]);
    }

    #[test]
    fn test_clear_returns_old_storage_and_resets() {
        let cache = TransactionCache::new();
        for _ in 0..10 {
            cache.insert(Record::generate());
        }

        let old = cache.clear();
        assert_eq!(old.len(), 10);
        assert!(cache.is_empty());

        // the returned storage is independent of the fresh one
        cache.insert(Record::generate());
        assert_eq!(old.len(), 10);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_tokens_are_unique_per_record() {
        let a = Record::generate();
        let b = Record::generate();
        assert_ne!(a.token(), b.token());
    }
}
