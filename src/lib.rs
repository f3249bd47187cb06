//! Find recipes for the ingredients you have.
//!
//! A [`RecipeSearch`] sends a comma-separated ingredient list to one
//! recipe-search provider (Spoonacular or Edamam) and returns the results as
//! provider-agnostic [`CanonicalRecipe`] records.
//!
//! # Example
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use recipe_finder::{Provider, RecipeSearch};
//!
//! let search = RecipeSearch::builder()
//!     .provider(Provider::Edamam)
//!     .app_id("your-app-id")
//!     .api_key("your-app-key")
//!     .build()?;
//!
//! for recipe in search.search("rice, dal, onion").await? {
//!     println!("{} -> {}", recipe.title(), recipe.recipe_url());
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod providers;
pub mod search;

pub use builder::{Provider, RecipeSearchBuilder};
pub use config::{ProviderConfig, SearchConfig};
pub use error::{ProviderError, SearchError};
pub use model::{CanonicalRecipe, SearchQuery};
pub use providers::{EdamamProvider, ProviderFactory, RecipeProvider, SpoonacularProvider};
pub use search::RecipeSearch;

/// Search recipes with the provider selected in configuration
///
/// Configuration is read from `config.toml` and `RECIPE_FINDER__*`
/// environment variables on every call; keep a [`RecipeSearch`] around to
/// reuse it across searches.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = recipe_finder::search_recipes("rice, dal").await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(ingredients: &str) -> Result<Vec<CanonicalRecipe>, SearchError> {
    // Blank input is rejected before touching configuration
    SearchQuery::parse(ingredients)?;

    let config = SearchConfig::load()?;
    RecipeSearch::from_config(&config)?.search(ingredients).await
}
