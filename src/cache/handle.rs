//! Cache Handle Module
//!
//! The concurrency-safe facade over the entry store. Owns the shared state
//! and the background sweep task bound to it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::cache::CacheStore;
use crate::tasks::spawn_sweep_task;

// == Cache ==
/// A time-expiring key-value cache for raw byte payloads.
///
/// Values are stamped on insertion and removed by a background sweep once
/// their age reaches the configured interval. The same interval doubles as
/// the sweep period, so an entry lives at most two intervals and at least
/// one.
///
/// All operations are safe to call concurrently; readers and the sweep
/// contend on a single lock around the entry map, held only for the map
/// access itself.
#[derive(Debug)]
pub struct Cache {
    /// Entry map shared with the sweep task
    store: Arc<RwLock<CacheStore>>,
    /// Sender half of the sweep shutdown signal
    shutdown: watch::Sender<bool>,
    /// Handle of the sweep task, awaited on stop
    sweeper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// `interval` is both the age at which entries expire and the period of
    /// the background sweep. Construction does not block; the first sweep
    /// pass runs one full interval after this call.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Panics
    /// Panics if `interval` is zero.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "cache interval must be positive");

        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let sweeper = spawn_sweep_task(store.clone(), interval, shutdown_rx);

        Self {
            store,
            shutdown,
            sweeper,
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// The value is stamped with the current time; overwriting an existing
    /// key resets its age to zero. Cannot fail.
    pub async fn add(&self, key: String, value: Vec<u8>) {
        let mut store = self.store.write().await;
        store.add(key, value);
    }

    // == Get ==
    /// Retrieves the value stored under `key`, or `None` if there is none.
    ///
    /// A `None` covers both "never added" and "expired and swept" - the two
    /// are indistinguishable by design.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        store.get(key)
    }

    // == Stop ==
    /// Stops the background sweep task and waits for it to exit.
    ///
    /// Consuming `self` makes stopping single-use: a stopped cache cannot be
    /// used or stopped again. Dropping a `Cache` without calling `stop` also
    /// terminates the sweep task, but only `stop` waits for it to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(err) = self.sweeper.await {
            warn!("Sweep task ended abnormally: {}", err);
        }
    }
}
