mod edamam;
mod factory;
mod spoonacular;

pub use edamam::EdamamProvider;
pub use factory::ProviderFactory;
pub use spoonacular::SpoonacularProvider;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Request, Url};

use crate::model::{CanonicalRecipe, SearchQuery};
use crate::ProviderError;

/// Unified trait for all recipe-search providers
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "spoonacular", "edamam")
    fn provider_name(&self) -> &str;

    /// Build the outbound GET request for a query
    fn build_request(&self, client: &Client, query: &SearchQuery)
        -> Result<Request, ProviderError>;

    /// Map a response body to canonical recipes, dropping unusable items
    fn parse_response(&self, body: &str) -> Result<Vec<CanonicalRecipe>, ProviderError>;

    /// Run one search against the provider
    async fn fetch(
        &self,
        client: &Client,
        query: &SearchQuery,
    ) -> Result<Vec<CanonicalRecipe>, ProviderError> {
        let request = self.build_request(client, query)?;
        debug!(
            "{} request: {}{}",
            self.provider_name(),
            request.url().origin().ascii_serialization(),
            request.url().path()
        );

        let response = client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with HTTP {}", self.provider_name(), status);
            return Err(ProviderError::Status {
                provider: self.provider_name().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        self.parse_response(&body)
    }
}

/// Join a base URL and an endpoint path
fn endpoint(base_url: &str, path: &str) -> Result<Url, ProviderError> {
    let joined = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", joined, e)))
}

/// Parse a response body as JSON
fn parse_json(provider: &str, body: &str) -> Result<serde_json::Value, ProviderError> {
    serde_json::from_str(body)
        .map_err(|e| ProviderError::Malformed(format!("{} response is not JSON: {}", provider, e)))
}
