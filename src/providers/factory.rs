use crate::config::{ProviderConfig, SearchConfig};
use crate::providers::{EdamamProvider, RecipeProvider, SpoonacularProvider};
use crate::SearchError;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn RecipeProvider>, SearchError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(SearchError::ProviderDisabled(provider_name.to_string()));
        }

        match provider_name {
            "spoonacular" => Ok(Box::new(
                SpoonacularProvider::new(config).map_err(|e| SearchError::Setup(e.to_string()))?,
            )),
            "edamam" => Ok(Box::new(
                EdamamProvider::new(config).map_err(|e| SearchError::Setup(e.to_string()))?,
            )),
            _ => Err(SearchError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// Get the configured provider
    pub fn get_configured_provider(
        config: &SearchConfig,
    ) -> Result<Box<dyn RecipeProvider>, SearchError> {
        Self::create(&config.provider, &config.active_provider())
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["spoonacular", "edamam"]
    }
}
