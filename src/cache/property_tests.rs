//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's storage contract over arbitrary keys
//! and byte payloads.

use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{Cache, CacheStore};

// == Test Configuration ==
const TEST_MAX_AGE: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates arbitrary keys, the empty string included
fn key_strategy() -> impl Strategy<Value = String> {
    ".{0,24}".prop_map(|s| s)
}

/// Generates arbitrary byte payloads, the empty payload included
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* key and value, storing the pair and retrieving it before
    // expiration returns the exact bytes that were stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_MAX_AGE);

        store.add(key.clone(), value.clone());

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value), "Round-trip value mismatch");
    }

    // *For any* key, storing value V1 and then V2 under the same key results
    // in a retrieval returning V2, with a single entry in the store.
    #[test]
    fn prop_overwrite_wins(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_MAX_AGE);

        store.add(key.clone(), value1);
        store.add(key.clone(), value2.clone());

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value2), "Overwrite should return new value");
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }

    // *For any* key, a freshly constructed store reports a miss. A miss and
    // an expired-and-swept entry are indistinguishable by design, so this is
    // the only absence observable from outside.
    #[test]
    fn prop_miss_on_fresh_store(key in key_strategy()) {
        let store = CacheStore::new(TEST_MAX_AGE);

        prop_assert_eq!(store.get(&key), None, "Fresh store should miss on every key");
    }

    // *For any* set of just-added entries, a sweep pass removes nothing: only
    // entries that have reached the age threshold are eligible.
    #[test]
    fn prop_sweep_preserves_fresh_entries(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..16)
    ) {
        let mut store = CacheStore::new(TEST_MAX_AGE);

        for (key, value) in &entries {
            store.add(key.clone(), value.clone());
        }

        prop_assert_eq!(store.sweep_expired(), 0, "Fresh entries must survive a sweep");
        for (key, value) in &entries {
            prop_assert_eq!(store.get(key), Some(value.clone()));
        }
    }
}

// Separate proptest block with fewer cases: each case starts a runtime and a
// live sweep task.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(15))]

    // *For any* set of disjoint keys added from concurrent tasks while the
    // sweep task is active, every key is retrievable with the exact value
    // that was stored, both from the writing task and afterwards.
    #[test]
    fn prop_concurrent_adds_are_retrievable(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..16)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let cache = Arc::new(Cache::new(Duration::from_secs(5)));

            let mut handles = Vec::new();
            for (key, value) in entries.clone() {
                let cache = Arc::clone(&cache);
                handles.push(tokio::spawn(async move {
                    cache.add(key.clone(), value).await;
                    let observed = cache.get(&key).await;
                    (key, observed)
                }));
            }

            for handle in handles {
                let (key, observed) = handle.await.expect("writer task should not panic");
                let expected = entries.get(&key).cloned();
                prop_assert_eq!(
                    observed,
                    expected,
                    "Writer should read back its own value"
                );
            }

            // Every entry is still present once all writers are done
            for (key, value) in &entries {
                prop_assert_eq!(cache.get(key).await, Some(value.clone()));
            }

            let cache = Arc::try_unwrap(cache).expect("all clones joined");
            cache.stop().await;
            Ok(())
        })?;
    }
}
