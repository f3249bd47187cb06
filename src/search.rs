use std::time::Duration;

use log::{debug, info};
use reqwest::Client;

use crate::builder::RecipeSearchBuilder;
use crate::config::SearchConfig;
use crate::model::{CanonicalRecipe, SearchQuery};
use crate::providers::{ProviderFactory, RecipeProvider};
use crate::SearchError;

/// Runs recipe searches against one provider chosen at construction.
///
/// The orchestrator holds no state between calls besides the provider and
/// its HTTP client, so `search` can be called concurrently. Each call makes
/// at most one outbound request and is never retried.
pub struct RecipeSearch {
    provider: Box<dyn RecipeProvider>,
    client: Client,
}

impl RecipeSearch {
    /// Use an explicit provider and client
    pub fn new(provider: Box<dyn RecipeProvider>, client: Client) -> Self {
        RecipeSearch { provider, client }
    }

    /// Resolve the configured provider and build a client for it
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let provider = ProviderFactory::get_configured_provider(config)?;
        let client = build_client(config.timeout.map(Duration::from_secs))?;
        Ok(Self::new(provider, client))
    }

    /// Creates a new builder for a search client
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Search recipes for a comma-separated ingredient list
    ///
    /// # Errors
    /// - [`SearchError::EmptyQuery`] when the text is blank; no request is made
    /// - [`SearchError::ProviderFailure`] on HTTP or transport failure
    /// - [`SearchError::MalformedResponse`] when the body cannot be understood
    ///
    /// A search that finds nothing returns `Ok` with an empty list.
    pub async fn search(&self, ingredients: &str) -> Result<Vec<CanonicalRecipe>, SearchError> {
        let query = SearchQuery::parse(ingredients)?;
        debug!(
            "Searching {} for '{}'",
            self.provider.provider_name(),
            query.as_str()
        );

        let recipes = self.provider.fetch(&self.client, &query).await?;
        info!(
            "Found {} recipes with {}",
            recipes.len(),
            self.provider.provider_name()
        );
        Ok(recipes)
    }
}

pub(crate) fn build_client(timeout: Option<Duration>) -> Result<Client, SearchError> {
    let mut builder = Client::builder().user_agent(concat!(
        "recipe-finder/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| SearchError::Setup(format!("Failed to create HTTP client: {}", e)))
}
