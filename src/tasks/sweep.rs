//! Periodic Sweep Task
//!
//! Background task that removes cache entries older than the configured
//! interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background task that periodically sweeps expired entries.
///
/// The task ticks once every `period`, with the first tick one full period
/// after spawning. On each tick it takes the write lock, removes every entry
/// whose age has reached the store's expiry threshold, and releases the lock
/// before waiting for the next tick. The timer wait itself never holds the
/// lock.
///
/// The task exits when a value is sent on the shutdown channel or when the
/// sender half is dropped, so a cache that goes away without an explicit
/// stop still terminates its sweeper.
///
/// # Arguments
/// * `store` - Shared reference to the entry store
/// * `period` - Time between two sweep passes
/// * `shutdown` - Receiver half of the shutdown signal
///
/// # Returns
/// A JoinHandle for the spawned task, which resolves once the task has
/// observed the shutdown signal and exited its loop.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(5))));
/// let (tx, rx) = watch::channel(false);
/// let handle = spawn_sweep_task(store.clone(), Duration::from_secs(5), rx);
/// // Later, during shutdown:
/// let _ = tx.send(true);
/// handle.await.unwrap();
/// ```
pub fn spawn_sweep_task(
    store: Arc<RwLock<CacheStore>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting sweep task with a period of {:?}", period);

        let mut ticker = interval_at(Instant::now() + period, period);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Hold the write lock only for the sweep itself
                    let removed = {
                        let mut store = store.write().await;
                        store.sweep_expired()
                    };

                    if removed > 0 {
                        info!("Sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Sweep: no expired entries found");
                    }
                }
                // Fires on an explicit stop signal and when the sender half
                // is dropped; both mean the cache is done with us.
                _ = shutdown.changed() => {
                    break;
                }
            }
        }

        info!("Sweep task stopped");
    })
}
