//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value together with the instant it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, opaque bytes (typically a raw response body)
    pub value: Vec<u8>,
    /// Instant at which the entry was inserted or last overwritten
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The bytes to store; may be empty
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago this entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `max_age`.
    ///
    /// Boundary condition: an entry is considered expired when its age is
    /// greater than or equal to `max_age`, so an entry exactly `max_age` old
    /// is already eligible for removal.
    ///
    /// # Returns
    /// - `true` if the entry's age >= `max_age`
    /// - `false` while the entry is younger than `max_age`
    pub fn is_expired(&self, max_age: Duration) -> bool {
        self.age() >= max_age
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(vec![1, 2, 3]);

        assert_eq!(entry.value, vec![1, 2, 3]);
        assert!(entry.age() < Duration::from_secs(1));
    }

    #[test]
    fn test_entry_not_expired_when_fresh() {
        let entry = CacheEntry::new(b"payload".to_vec());

        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expired_past_max_age() {
        // Backdate the creation instant instead of sleeping
        let entry = CacheEntry {
            value: Vec::new(),
            created_at: Instant::now() - Duration::from_millis(80),
        };

        assert!(entry.is_expired(Duration::from_millis(50)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // An entry whose age equals max_age exactly must count as expired
        let entry = CacheEntry {
            value: b"test".to_vec(),
            created_at: Instant::now() - Duration::from_millis(200),
        };

        assert!(
            entry.is_expired(Duration::from_millis(200)),
            "Entry should be expired at boundary"
        );
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let entry = CacheEntry::new(Vec::new());

        assert!(entry.value.is_empty());
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }
}
