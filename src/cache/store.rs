//! Cache Store Module
//!
//! The entry map underlying the TTL cache: plain HashMap storage plus the
//! age threshold applied by the periodic sweep.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage with age-based expiry.
///
/// The store itself is single-threaded; shared access and the periodic
/// sweep are layered on top by [`Cache`](crate::cache::Cache), which keeps
/// the store behind one `Arc<RwLock<..>>`.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age at or beyond which an entry is removed by the sweep
    max_age: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire once they reach `max_age`.
    pub fn new(max_age: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            max_age,
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamping it with the current
    /// time. Overwriting an existing key resets its age to zero.
    ///
    /// Keys and values of any length are accepted, empty ones included.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The bytes to store
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Retrieves a copy of the value stored under `key`.
    ///
    /// This is a plain map lookup: expiry is enforced solely by the sweep,
    /// so an entry past `max_age` that the sweep has not visited yet is
    /// still returned. A miss does not distinguish "never added" from
    /// "expired and removed".
    ///
    /// # Arguments
    /// * `key` - The key to look up
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Sweep Expired ==
    /// Removes every entry whose age has reached `max_age`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let before = self.entries.len();
        let max_age = self.max_age;
        self.entries.retain(|_, entry| !entry.is_expired(max_age));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
