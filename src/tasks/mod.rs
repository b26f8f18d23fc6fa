//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Sweep: removes entries older than the configured interval, once per
//!   interval

mod sweep;

pub use sweep::spawn_sweep_task;
