//! Pokemon DTO for the PokeAPI pokemon endpoint
//!
//! Declares the handful of stats the `catch` and `inspect` commands use.

use serde::Deserialize;

/// A single pokemon (GET /pokemon/{name}).
///
/// `base_experience` and `order` are `null` for some pokemon; a missing
/// value counts as zero wherever the stat is consumed, which for
/// `base_experience` makes those pokemon trivial to catch.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// National dex id
    pub id: u32,
    /// Lowercase pokemon name
    pub name: String,
    /// Experience yield, the catch difficulty stat
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Sort order; missing or null for some alternate forms
    #[serde(default)]
    pub order: Option<i32>,
    /// Whether this is the default form of the species
    #[serde(default)]
    pub is_default: bool,
}
