//! PokeAPI Client
//!
//! The outbound fetch layer. Every request is memoized through the response
//! cache under its URL, so repeating a request within the cache interval
//! costs no network round trip.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

// == PokeAPI Client ==
/// HTTP client for the PokeAPI, with response caching.
#[derive(Debug, Clone)]
pub struct PokeApi {
    /// Underlying HTTP client, cheap to clone
    http: reqwest::Client,
    /// API root URL without a trailing slash
    base_url: String,
}

impl PokeApi {
    // == Constructor ==
    /// Creates a new client using the configured base URL and timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    // == Fetch Bytes ==
    /// Returns the raw response body for `url`, from the cache when possible.
    ///
    /// On a cache miss the URL is fetched, any status outside the 2xx range
    /// is rejected, and the body is stored in the cache under the URL before
    /// being returned.
    pub async fn fetch_bytes(&self, cache: &Cache, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = cache.get(url).await {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }
        debug!("Cache miss for {}, fetching", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?.to_vec();
        cache.add(url.to_string(), body.clone()).await;
        Ok(body)
    }

    // == Fetch JSON ==
    /// Fetches `url` through the cache and decodes the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, cache: &Cache, url: &str) -> Result<T> {
        let body = self.fetch_bytes(cache, url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Areas ==
    /// Fetches one page of the location-area listing.
    ///
    /// `page_url` is the absolute URL of the page to load, as handed out by
    /// a previous page's `next`/`previous` field; `None` loads the first
    /// page.
    pub async fn location_areas(
        &self,
        cache: &Cache,
        page_url: Option<&str>,
    ) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!("{}/location-area/", self.base_url),
        };
        self.fetch_json(cache, &url).await
    }

    // == Location Area ==
    /// Fetches one location area by name.
    pub async fn location_area(&self, cache: &Cache, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(cache, &url).await
    }

    // == Pokemon ==
    /// Fetches one pokemon by name.
    pub async fn pokemon(&self, cache: &Cache, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(cache, &url).await
    }
}
