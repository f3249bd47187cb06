use crate::config::ProviderConfig;
use crate::model::{ingredient_names, CanonicalRecipe, SearchQuery};
use crate::providers::{endpoint, parse_json, RecipeProvider};
use crate::ProviderError;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Request};
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
const RECIPE_LINK_BASE: &str = "https://spoonacular.com/recipes";
const THUMBNAIL_SIZE: &str = "312x231";
const LARGE_SIZE: &str = "636x393";

pub struct SpoonacularProvider {
    api_key: String,
    base_url: String,
    number: u32,
    ranking: u8,
    cuisine: Option<String>,
    ingredient_cap: usize,
}

impl SpoonacularProvider {
    /// Create a new Spoonacular provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .ok_or_else(|| {
                ProviderError::MissingCredential(
                    "SPOONACULAR_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(SpoonacularProvider {
            api_key,
            base_url,
            number: config.number,
            ranking: config.ranking,
            cuisine: config.cuisine_filter().map(str::to_string),
            ingredient_cap: config.ingredient_cap,
        })
    }

    /// Public page for a recipe id
    pub fn recipe_link(id: &str) -> String {
        format!("{}/-{}", RECIPE_LINK_BASE, id)
    }

    fn recipe_from_item(&self, item: &Value) -> Option<CanonicalRecipe> {
        let id = match item.get("id")? {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            _ => return None,
        };
        let title = item.get("title")?.as_str()?;
        let image = item
            .get("image")
            .and_then(Value::as_str)
            .map(|url| url.replacen(THUMBNAIL_SIZE, LARGE_SIZE, 1));
        let ingredients = ingredient_names(item.get("usedIngredients"), self.ingredient_cap);

        let recipe_url = Self::recipe_link(id.trim());
        CanonicalRecipe::new(id, title, image, ingredients, recipe_url, self.ingredient_cap)
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularProvider {
    fn provider_name(&self) -> &str {
        "spoonacular"
    }

    fn build_request(
        &self,
        client: &Client,
        query: &SearchQuery,
    ) -> Result<Request, ProviderError> {
        let url = endpoint(&self.base_url, "/recipes/findByIngredients")?;

        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", self.api_key.clone()),
            ("ingredients", query.as_str().to_string()),
            ("number", self.number.to_string()),
            ("ranking", self.ranking.to_string()),
        ];
        if let Some(cuisine) = &self.cuisine {
            params.push(("cuisine", cuisine.clone()));
        }
        params.push(("sort", "max-used-ingredients".to_string()));
        params.push(("instructionsRequired", "true".to_string()));
        params.push(("addRecipeInformation", "true".to_string()));

        Ok(client.get(url).query(&params).build()?)
    }

    fn parse_response(&self, body: &str) -> Result<Vec<CanonicalRecipe>, ProviderError> {
        let data = parse_json(self.provider_name(), body)?;
        let items = data.as_array().ok_or_else(|| {
            ProviderError::Malformed("spoonacular response is not an array".to_string())
        })?;

        let recipes: Vec<CanonicalRecipe> = items
            .iter()
            .filter_map(|item| {
                let recipe = self.recipe_from_item(item);
                if recipe.is_none() {
                    debug!("Dropping spoonacular item without id or title: {}", item);
                }
                recipe
            })
            .collect();

        info!(
            "spoonacular returned {} recipes ({} dropped)",
            recipes.len(),
            items.len() - recipes.len()
        );
        Ok(recipes)
    }
}
