use serde::Serialize;
use serde_json::Value;

use crate::SearchError;

/// A provider-agnostic recipe, ready to render.
///
/// Records are only created through [`CanonicalRecipe::new`], which enforces
/// that `id`, `title` and `recipe_url` are non-empty and that the ingredient
/// list respects the provider's display cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRecipe {
    id: String,
    title: String,
    image_url: Option<String>,
    used_ingredients: Vec<String>,
    recipe_url: String,
}

impl CanonicalRecipe {
    /// Build a record, or `None` if it would not be well formed.
    ///
    /// The title is sanitized before the emptiness check, an empty image URL
    /// is treated as absent and `used_ingredients` is truncated to `cap`.
    pub fn new(
        id: impl Into<String>,
        title: &str,
        image_url: Option<String>,
        mut used_ingredients: Vec<String>,
        recipe_url: impl Into<String>,
        cap: usize,
    ) -> Option<Self> {
        let id = id.into().trim().to_string();
        let title = sanitize_title(title);
        let recipe_url = recipe_url.into().trim().to_string();
        if id.is_empty() || title.is_empty() || recipe_url.is_empty() {
            return None;
        }

        used_ingredients.truncate(cap);

        Some(CanonicalRecipe {
            id,
            title,
            image_url: image_url.filter(|url| !url.trim().is_empty()),
            used_ingredients,
            recipe_url,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn used_ingredients(&self) -> &[String] {
        &self.used_ingredients
    }

    pub fn recipe_url(&self) -> &str {
        &self.recipe_url
    }
}

/// Free-text ingredient list, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(text: &str) -> Result<Self, SearchError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(SearchQuery(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `limit` comma-separated segments, each trimmed.
    ///
    /// Empty segments (`"rice,,dal"`) are kept and count towards `limit`.
    pub fn terms(&self, limit: usize) -> Vec<&str> {
        self.0.split(',').map(str::trim).take(limit).collect()
    }
}

/// Strip characters outside the safe display set and trim the result.
///
/// Kept: ASCII letters and digits, `_`, whitespace, and `- . , & ( )`.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '_' | '-' | '.' | ',' | '&' | '(' | ')')
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize a provider's ingredient field into a list of names.
///
/// Arrays yield the `name` of each object element and each string element
/// as-is; a plain string is passed through as a single entry without being
/// re-split. Anything else yields nothing.
pub fn ingredient_names(field: Option<&Value>, cap: usize) -> Vec<String> {
    match field {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(obj) => obj.get("name").and_then(Value::as_str),
                Value::String(s) => Some(s.as_str()),
                _ => None,
            })
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .take(cap)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() && cap > 0 => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}
