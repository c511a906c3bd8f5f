pub mod builder;
pub mod config;
pub mod error;
pub mod favorites;
pub mod list;
pub mod model;
pub mod session;
pub mod sources;
pub mod storage;
pub mod view;

pub use builder::{RecipeFinder, RecipeFinderBuilder};
pub use config::FinderConfig;
pub use error::FinderError;
pub use favorites::{FavoritesStore, ToggleOutcome};
pub use list::{PageButton, Pagination, RecipeListStore};
pub use model::{Ingredient, Recipe};
pub use session::{DetailOutcome, LoadOutcome, LoadRequest, LoadTicket, Session};
pub use sources::{FeaturedCatalog, MealDbClient, RecipeSource};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use view::{DetailView, PageView, RecipeCard, ViewMode, ViewState};

use std::time::Duration;

/// Search TheMealDB once, without a session.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_finder::FinderError> {
/// let recipes = recipe_finder::search_recipes("arrabiata").await?;
/// println!("{} matches", recipes.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<Vec<Recipe>, FinderError> {
    search_recipes_with_timeout(query, None).await
}

pub async fn search_recipes_with_timeout(
    query: &str,
    timeout: Option<Duration>,
) -> Result<Vec<Recipe>, FinderError> {
    let config = FinderConfig::load()?;
    let timeout = timeout.or(Some(Duration::from_secs(config.api.timeout)));
    MealDbClient::new(config.api.base_url, timeout)?
        .search(query)
        .await
}

/// Fetch one recipe by id, without a session.
pub async fn lookup_recipe(id: &str) -> Result<Recipe, FinderError> {
    let config = FinderConfig::load()?;
    MealDbClient::new(
        config.api.base_url,
        Some(Duration::from_secs(config.api.timeout)),
    )?
    .lookup(id)
    .await
}
