//! Read-only snapshots handed to the rendering layer.

use crate::list::Pagination;
use crate::model::Recipe;

/// What the result area is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing requested yet
    Idle,
    /// A load is in flight; the grid is hidden
    Loading,
    Results,
    /// The API had no match (or there are no favorites)
    NotFound,
    /// The last load failed; nothing is shown and no message is given
    Failed,
}

/// Which collection the grid is projecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Search, category or featured results
    Browse,
    /// Live projection of the favorites store
    Favorites,
}

/// One card of the recipe grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub thumbnail_url: String,
    pub summary: String,
    pub favorite: bool,
}

impl RecipeCard {
    pub fn new(recipe: &Recipe, favorite: bool) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            area: recipe.area.clone(),
            thumbnail_url: recipe.thumbnail_url.clone(),
            summary: recipe.summary(),
            favorite,
        }
    }
}

/// The grid, title and pagination bar, all taken from the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub mode: ViewMode,
    pub state: ViewState,
    pub active_category: Option<String>,
    pub cards: Vec<RecipeCard>,
    /// Present only while results are shown
    pub pagination: Option<Pagination>,
}

/// The open recipe detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub recipe: Recipe,
    pub ingredient_lines: Vec<String>,
    pub favorite: bool,
}
