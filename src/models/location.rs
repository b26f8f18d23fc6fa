//! Location DTOs for the PokeAPI location-area endpoints
//!
//! Only the fields the commands actually consume are declared; everything
//! else in the responses is ignored during decoding.

use serde::Deserialize;

/// A named API resource: a display name plus the URL it lives at.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. a location area or pokemon name
    pub name: String,
    /// Canonical URL of the resource
    pub url: String,
}

/// One page of the location-area listing (GET /location-area/).
///
/// `next` and `previous` are absolute page URLs; the API sends `null` at
/// either end of the listing, which decodes to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas known to the API
    pub count: u32,
    /// URL of the following page, if any
    pub next: Option<String>,
    /// URL of the preceding page, if any
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// A single location area (GET /location-area/{name}).
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    /// The pokemon that can be encountered in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One possible encounter within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The pokemon this encounter refers to
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize_first_page() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_page_deserialize_last_page() {
        let json = r#"{
            "count": 1089,
            "next": null,
            "previous": "https://pokeapi.co/api/v2/location-area/?offset=1060&limit=20",
            "results": []
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.next, None);
        assert!(page.previous.is_some());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_location_area_ignores_unknown_fields() {
        // The real endpoint carries encounter rates, names, game indices and
        // more; only pokemon_encounters is decoded.
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "encounter_method_rates": [],
            "pokemon_encounters": [
                {
                    "pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"},
                    "version_details": []
                },
                {
                    "pokemon": {"name": "magikarp", "url": "https://pokeapi.co/api/v2/pokemon/129/"},
                    "version_details": []
                }
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.pokemon_encounters.len(), 2);
        assert_eq!(area.pokemon_encounters[0].pokemon.name, "tentacool");
        assert_eq!(area.pokemon_encounters[1].pokemon.name, "magikarp");
    }
}
