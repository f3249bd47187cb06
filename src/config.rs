use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Main search configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Provider used for every search
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Request timeout in seconds; unset means the HTTP client default (none)
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            providers: HashMap::new(),
            timeout: None,
        }
    }
}

/// Configuration for a specific recipe-search provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// API key (Spoonacular `apiKey`, Edamam `app_key`)
    pub api_key: Option<String>,
    /// Application id (Edamam only)
    pub app_id: Option<String>,
    /// Base URL for the API endpoint (for proxies and tests)
    pub base_url: Option<String>,
    /// Number of results requested
    #[serde(default = "default_number")]
    pub number: u32,
    /// Ranking strategy (Spoonacular: 1 maximizes used, 2 minimizes missing)
    #[serde(default = "default_ranking")]
    pub ranking: u8,
    /// Cuisine filter; an empty string disables it
    #[serde(default = "default_cuisine")]
    pub cuisine: Option<String>,
    /// Maximum number of ingredients kept on each recipe
    #[serde(default = "default_ingredient_cap")]
    pub ingredient_cap: usize,
    /// Maximum number of comma-separated terms sent (Edamam only)
    #[serde(default = "default_query_terms")]
    pub query_terms: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: None,
            app_id: None,
            base_url: None,
            number: default_number(),
            ranking: default_ranking(),
            cuisine: default_cuisine(),
            ingredient_cap: default_ingredient_cap(),
            query_terms: default_query_terms(),
        }
    }
}

impl ProviderConfig {
    /// Cuisine filter, treating blank values as unset
    pub fn cuisine_filter(&self) -> Option<&str> {
        self.cuisine
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

// Default value functions
fn default_provider() -> String {
    "spoonacular".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_number() -> u32 {
    10
}

fn default_ranking() -> u8 {
    2
}

fn default_cuisine() -> Option<String> {
    Some("Indian".to_string())
}

fn default_ingredient_cap() -> usize {
    3
}

fn default_query_terms() -> usize {
    3
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Settings for the selected provider, or defaults when it is not listed
    pub fn active_provider(&self) -> ProviderConfig {
        self.providers
            .get(&self.provider)
            .cloned()
            .unwrap_or_default()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_FINDER__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_FINDER__PROVIDERS__EDAMAM__APP_ID
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> SearchConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_provider(), "spoonacular");
        assert_eq!(default_number(), 10);
        assert_eq!(default_ranking(), 2);
        assert_eq!(default_ingredient_cap(), 3);
        assert_eq!(default_query_terms(), 3);
        assert_eq!(default_cuisine().as_deref(), Some("Indian"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.provider, "spoonacular");
        assert!(config.providers.is_empty());
        assert!(config.timeout.is_none());

        let provider = config.active_provider();
        assert!(provider.enabled);
        assert_eq!(provider.number, 10);
    }

    #[test]
    fn test_provider_section() {
        let config = from_toml(
            r#"
            provider = "edamam"
            timeout = 15

            [providers.edamam]
            app_id = "abc"
            api_key = "secret"
            cuisine = ""
            query_terms = 2
            "#,
        );

        assert_eq!(config.provider, "edamam");
        assert_eq!(config.timeout, Some(15));

        let edamam = config.active_provider();
        assert_eq!(edamam.app_id.as_deref(), Some("abc"));
        assert_eq!(edamam.api_key.as_deref(), Some("secret"));
        assert_eq!(edamam.query_terms, 2);
        assert_eq!(edamam.ingredient_cap, 3);
        assert_eq!(edamam.cuisine_filter(), None);
    }

    #[test]
    fn test_cuisine_filter_trims() {
        let config = ProviderConfig {
            cuisine: Some("  Thai ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.cuisine_filter(), Some("Thai"));
    }
}
