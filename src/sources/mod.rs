mod featured;
mod mealdb;

pub use featured::FeaturedCatalog;
pub use mealdb::MealDbClient;

use async_trait::async_trait;

use crate::error::FinderError;
use crate::model::Recipe;

/// Unified trait for anything that can answer recipe searches and lookups
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "themealdb")
    fn source_name(&self) -> &str;

    /// Search by free text or category tag.
    ///
    /// No match is `Err(FinderError::NotFound)`, never an empty `Ok`.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, FinderError>;

    /// Fetch a single recipe by id.
    async fn lookup(&self, id: &str) -> Result<Recipe, FinderError>;
}
