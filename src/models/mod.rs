//! Response models for the PokeAPI endpoints
//!
//! This module defines the DTOs (Data Transfer Objects) used for decoding
//! the JSON bodies the fetch layer retrieves.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::Pokemon;
