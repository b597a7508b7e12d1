//! BreedProvider implementation backed by the dog.ceo API.
//!
//! All failures get reported as `DogdexError::BreedNotFound` to align with
//! the requirements of the `BreedProvider` port: transport errors,
//! unexpected status envelopes, and malformed bodies are logged at debug
//! level and then collapsed into the single not-found kind.

use async_trait::async_trait;
use dogdex_core::BreedProvider;
use dogdex_domain::{DogApiConfig, DogdexError, Result, SubBreeds};
use tracing::debug;

use super::types::BreedListResponse;
use crate::http::HttpClient;

/// dog.ceo breed-listing client
pub struct DogApiBreedProvider {
    http_client: HttpClient,
    base_url: String,
}

impl DogApiBreedProvider {
    /// Create a provider from the given configuration.
    ///
    /// # Errors
    /// Returns `DogdexError::Config` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &DogApiConfig) -> Result<Self> {
        let http_client = HttpClient::from_config(config)?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a provider reusing an existing HTTP client.
    pub fn with_http_client(config: &DogApiConfig, http_client: HttpClient) -> Self {
        Self { http_client, base_url: config.base_url.trim_end_matches('/').to_string() }
    }

    /// Fetch with the full error detail, before the boundary collapse.
    async fn fetch_sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        let url = format!("{}/breed/{}/list", self.base_url, breed);
        let response = self.http_client.get(&url).await?;

        // The API reports errors through the JSON envelope (alongside a
        // non-2xx status), so the body is parsed regardless of status code.
        let body: BreedListResponse = response
            .json()
            .await
            .map_err(|err| DogdexError::InvalidResponse(err.to_string()))?;

        if !body.is_success() {
            return Err(DogdexError::BreedNotFound(breed.to_string()));
        }

        serde_json::from_value(body.message)
            .map_err(|err| DogdexError::InvalidResponse(format!("unexpected message field: {err}")))
    }
}

#[async_trait]
impl BreedProvider for DogApiBreedProvider {
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        self.fetch_sub_breeds(breed).await.map_err(|err| {
            if !err.is_breed_not_found(breed) {
                debug!(breed, error = %err, "lookup failed, reporting breed as not found");
            }
            DogdexError::BreedNotFound(breed.to_string())
        })
    }
}
