use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::RecipeSource;
use crate::error::FinderError;
use crate::model::{MealsResponse, Recipe};

/// The "All" listing: a bundled catalog file, with a remote search as fallback.
pub struct FeaturedCatalog {
    path: PathBuf,
    remote: Arc<dyn RecipeSource>,
    fallback_query: String,
}

impl FeaturedCatalog {
    pub fn new(
        path: impl Into<PathBuf>,
        remote: Arc<dyn RecipeSource>,
        fallback_query: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            remote,
            fallback_query: fallback_query.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the featured recipes.
    ///
    /// A catalog that says `meals: null` is NotFound. A catalog that cannot be
    /// read or parsed triggers one remote search for the fallback query.
    pub async fn load(&self) -> Result<Vec<Recipe>, FinderError> {
        match self.read_catalog().await {
            Ok(Some(recipes)) => {
                debug!("Loaded {} featured recipes from {:?}", recipes.len(), self.path);
                Ok(recipes)
            }
            Ok(None) => Err(FinderError::NotFound("featured".to_string())),
            Err(e) => {
                warn!("Local catalog failed ({}), falling back to remote search", e);
                info!(
                    "Searching {} for {:?}",
                    self.remote.source_name(),
                    self.fallback_query
                );
                self.remote.search(&self.fallback_query).await
            }
        }
    }

    async fn read_catalog(&self) -> Result<Option<Vec<Recipe>>, FinderError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FinderError::CatalogError(format!("{}: {}", self.path.display(), e)))?;
        let response: MealsResponse = serde_json::from_str(&content)
            .map_err(|e| FinderError::CatalogError(format!("{}: {}", self.path.display(), e)))?;
        response.into_recipes()
    }
}
