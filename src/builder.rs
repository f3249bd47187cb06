use std::time::Duration;

use crate::config::ProviderConfig;
use crate::providers::ProviderFactory;
use crate::search::{build_client, RecipeSearch};
use crate::SearchError;

/// Supported recipe-search providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Provider {
    /// Broad multi-ingredient search (default)
    #[default]
    Spoonacular,
    /// Search limited to the first few ingredients
    Edamam,
}

impl Provider {
    /// Convert to provider name string used by the factory
    pub fn as_str(&self) -> &str {
        match self {
            Provider::Spoonacular => "spoonacular",
            Provider::Edamam => "edamam",
        }
    }
}

/// Builder for configuring a [`RecipeSearch`] without a config file
#[derive(Debug, Default)]
pub struct RecipeSearchBuilder {
    provider: Provider,
    config: ProviderConfig,
    timeout: Option<Duration>,
}

impl RecipeSearchBuilder {
    /// Select the provider
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{Provider, RecipeSearch};
    ///
    /// let builder = RecipeSearch::builder().provider(Provider::Edamam);
    /// ```
    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Set the API key (Spoonacular `apiKey`, Edamam `app_key`)
    ///
    /// When unset, the provider falls back to its environment variable.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the application id (Edamam only)
    pub fn app_id(mut self, id: impl Into<String>) -> Self {
        self.config.app_id = Some(id.into());
        self
    }

    /// Point the provider at another host, e.g. a proxy
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the cuisine filter; an empty string disables it
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.config.cuisine = Some(cuisine.into());
        self
    }

    /// Set the number of results requested
    pub fn number(mut self, number: u32) -> Self {
        self.config.number = number;
        self
    }

    /// Set how many ingredients are kept on each recipe
    pub fn ingredient_cap(mut self, cap: usize) -> Self {
        self.config.ingredient_cap = cap;
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSearch::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the search client
    ///
    /// # Errors
    /// Returns [`SearchError::Setup`] if a required credential is missing
    /// from both the builder and the environment.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeSearch;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let search = RecipeSearch::builder().api_key("your-api-key").build()?;
    /// let recipes = search.search("rice, dal, onion").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<RecipeSearch, SearchError> {
        let provider = ProviderFactory::create(self.provider.as_str(), &self.config)?;
        let client = build_client(self.timeout)?;
        Ok(RecipeSearch::new(provider, client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names() {
        assert_eq!(Provider::default(), Provider::Spoonacular);
        assert_eq!(Provider::Spoonacular.as_str(), "spoonacular");
        assert_eq!(Provider::Edamam.as_str(), "edamam");
    }

    #[test]
    fn test_build_spoonacular() {
        let search = RecipeSearch::builder()
            .api_key("key")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(search.provider_name(), "spoonacular");
    }

    #[test]
    fn test_build_edamam() {
        let search = RecipeSearch::builder()
            .provider(Provider::Edamam)
            .app_id("app")
            .api_key("key")
            .build()
            .unwrap();
        assert_eq!(search.provider_name(), "edamam");
    }
}
