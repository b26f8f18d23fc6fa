//! Cache Module
//!
//! Provides the in-memory TTL cache: opaque byte values keyed by string,
//! swept periodically by a background task once entries outlive the
//! configured interval.

mod entry;
mod handle;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use store::CacheStore;
