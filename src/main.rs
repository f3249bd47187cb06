use log::error;
use std::env;
use std::process::ExitCode;

use recipe_finder::{search_recipes, CanonicalRecipe, SearchError};

const PLACEHOLDER_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1588168333986-5078d3ae3976?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1563379091339-03246963d96c?w=400&h=250&fit=crop",
];

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    // Ingredients may be quoted as one argument or spread over several
    let ingredients = env::args().skip(1).collect::<Vec<_>>().join(" ");

    match search_recipes(&ingredients).await {
        Ok(recipes) if recipes.is_empty() => {
            println!("No recipes found for these ingredients.");
            ExitCode::SUCCESS
        }
        Ok(recipes) => {
            for (index, recipe) in recipes.iter().enumerate() {
                print_card(index, recipe);
            }
            ExitCode::SUCCESS
        }
        Err(SearchError::EmptyQuery) => {
            eprintln!("Please enter some ingredients.");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Failed to fetch recipes. Please check your API keys and try again.");
            ExitCode::FAILURE
        }
    }
}

fn print_card(index: usize, recipe: &CanonicalRecipe) {
    let image = recipe
        .image_url()
        .unwrap_or(PLACEHOLDER_IMAGES[index % PLACEHOLDER_IMAGES.len()]);
    let ingredients = if recipe.used_ingredients().is_empty() {
        "See full recipe for details".to_string()
    } else {
        recipe.used_ingredients().join(", ")
    };

    println!("{}", recipe.title());
    println!("  Image:       {}", image);
    println!("  Ingredients: {}", ingredients);
    println!("  Recipe:      {}", recipe.recipe_url());
    println!();
}
