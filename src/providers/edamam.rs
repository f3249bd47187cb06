use crate::config::ProviderConfig;
use crate::model::{ingredient_names, CanonicalRecipe, SearchQuery};
use crate::providers::{endpoint, parse_json, RecipeProvider};
use crate::ProviderError;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Request};
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://api.edamam.com";
const RESOURCE_URI_PREFIX: &str = "http://www.edamam.com/ontologies/edamam.owl#recipe";

/// Edamam recipe search.
///
/// Edamam ranks poorly with long ingredient lists, so only the first
/// `query_terms` comma-separated terms are sent, joined with spaces.
pub struct EdamamProvider {
    app_id: String,
    app_key: String,
    base_url: String,
    cuisine: Option<String>,
    query_terms: usize,
    ingredient_cap: usize,
}

impl EdamamProvider {
    /// Create a new Edamam provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let app_id = config
            .app_id
            .clone()
            .or_else(|| std::env::var("EDAMAM_APP_ID").ok())
            .ok_or_else(|| {
                ProviderError::MissingCredential(
                    "EDAMAM_APP_ID not found in config or environment".to_string(),
                )
            })?;
        let app_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("EDAMAM_APP_KEY").ok())
            .ok_or_else(|| {
                ProviderError::MissingCredential(
                    "EDAMAM_APP_KEY not found in config or environment".to_string(),
                )
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(EdamamProvider {
            app_id,
            app_key,
            base_url,
            cuisine: config.cuisine_filter().map(str::to_string),
            query_terms: config.query_terms,
            ingredient_cap: config.ingredient_cap,
        })
    }

    /// Text sent as `q`: the first `query_terms` terms joined with spaces
    pub fn query_text(&self, query: &SearchQuery) -> String {
        query.terms(self.query_terms).join(" ")
    }

    /// Canonical id for a resource URI: the segment after the first `_`
    pub fn recipe_id(uri: &str) -> Option<&str> {
        uri.split('_').nth(1).filter(|id| !id.is_empty())
    }

    /// Resource URI for a canonical id, the inverse of [`EdamamProvider::recipe_id`]
    pub fn resource_uri(id: &str) -> String {
        format!("{}_{}", RESOURCE_URI_PREFIX, id)
    }

    fn recipe_from_hit(&self, hit: &Value) -> Option<CanonicalRecipe> {
        let recipe = hit.get("recipe")?;
        let id = Self::recipe_id(recipe.get("uri")?.as_str()?)?;
        let title = recipe.get("label")?.as_str()?;
        let url = recipe.get("url")?.as_str()?;
        let image = recipe
            .get("image")
            .and_then(Value::as_str)
            .map(str::to_string);
        let ingredients = ingredient_names(recipe.get("ingredientLines"), self.ingredient_cap);

        CanonicalRecipe::new(id, title, image, ingredients, url, self.ingredient_cap)
    }
}

#[async_trait]
impl RecipeProvider for EdamamProvider {
    fn provider_name(&self) -> &str {
        "edamam"
    }

    fn build_request(
        &self,
        client: &Client,
        query: &SearchQuery,
    ) -> Result<Request, ProviderError> {
        let url = endpoint(&self.base_url, "/api/recipes/v2")?;

        let mut params: Vec<(&str, String)> = vec![
            ("type", "public".to_string()),
            ("app_id", self.app_id.clone()),
            ("app_key", self.app_key.clone()),
            ("q", self.query_text(query)),
        ];
        if let Some(cuisine) = &self.cuisine {
            params.push(("cuisineType", cuisine.clone()));
        }

        Ok(client.get(url).query(&params).build()?)
    }

    fn parse_response(&self, body: &str) -> Result<Vec<CanonicalRecipe>, ProviderError> {
        let data = parse_json(self.provider_name(), body)?;
        if !data.is_object() {
            return Err(ProviderError::Malformed(
                "edamam response is not an object".to_string(),
            ));
        }

        let hits = data.get("hits").and_then(Value::as_array).ok_or_else(|| {
            ProviderError::Malformed("edamam response has no `hits` array".to_string())
        })?;

        let recipes: Vec<CanonicalRecipe> = hits
            .iter()
            .filter_map(|hit| {
                let recipe = self.recipe_from_hit(hit);
                if recipe.is_none() {
                    debug!("Dropping edamam hit without id, label or url: {}", hit);
                }
                recipe
            })
            .collect();

        info!(
            "edamam returned {} recipes ({} dropped)",
            recipes.len(),
            hits.len() - recipes.len()
        );
        Ok(recipes)
    }
}
