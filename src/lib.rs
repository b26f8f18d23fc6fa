//! Pokedex CLI - A command line Pokedex backed by the PokeAPI
//!
//! Looks up location areas and pokemon over HTTP and keeps every response
//! in a time-expiring in-memory cache.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeApi;
pub use config::Config;
pub use error::{PokedexError, Result};
