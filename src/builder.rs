use directories::ProjectDirs;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::favorites::FavoritesStore;
use crate::list::RecipeListStore;
use crate::session::Session;
use crate::sources::{FeaturedCatalog, MealDbClient, RecipeSource};
use crate::storage::{FileStore, KeyValueStore};

/// File name of the favorites store inside the platform data directory
const STORE_FILE: &str = "store.json";

/// Builder for configuring a [`Session`]
#[derive(Default)]
pub struct RecipeFinderBuilder {
    config: FinderConfig,
    base_url: Option<String>,
    page_size: Option<usize>,
    timeout: Option<Duration>,
    storage_path: Option<PathBuf>,
    featured_path: Option<PathBuf>,
    storage: Option<Box<dyn KeyValueStore>>,
    source: Option<Arc<dyn RecipeSource>>,
}

impl RecipeFinderBuilder {
    /// Start from a loaded configuration instead of the defaults
    ///
    /// # Example
    /// ```no_run
    /// use recipe_finder::{FinderConfig, RecipeFinder};
    ///
    /// let config = FinderConfig::load().unwrap();
    /// let builder = RecipeFinder::builder().config(config);
    /// ```
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = config;
        self
    }

    /// Point the client at another API root, e.g. a mock server
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the number of cards per page
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Persist favorites in this JSON file
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Read the featured listing from this catalog file
    pub fn featured_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.featured_path = Some(path.into());
        self
    }

    /// Use a custom key-value store for favorites (takes precedence over `storage_path`)
    pub fn storage(mut self, storage: Box<dyn KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Use a custom recipe source (takes precedence over `base_url`)
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Assemble the session
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - The page size is zero
    /// - The HTTP client cannot be created
    /// - No storage location can be determined
    /// - The persisted favorites cannot be read
    pub fn build(self) -> Result<Session, FinderError> {
        let page_size = self.page_size.unwrap_or(self.config.pagination.page_size);
        if page_size == 0 {
            return Err(FinderError::BuilderError(
                "Page size must be at least 1".to_string(),
            ));
        }

        let source: Arc<dyn RecipeSource> = match self.source {
            Some(source) => source,
            None => {
                let base_url = self
                    .base_url
                    .unwrap_or_else(|| self.config.api.base_url.clone());
                let timeout = self
                    .timeout
                    .unwrap_or(Duration::from_secs(self.config.api.timeout));
                Arc::new(MealDbClient::new(base_url, Some(timeout))?)
            }
        };

        let storage: Box<dyn KeyValueStore> = match self.storage {
            Some(storage) => storage,
            None => {
                let path = match self.storage_path.or(self.config.storage.path) {
                    Some(path) => path,
                    None => default_storage_path()?,
                };
                debug!("Favorites stored at {:?}", path);
                Box::new(FileStore::open(path)?)
            }
        };

        let featured = FeaturedCatalog::new(
            self.featured_path.unwrap_or(self.config.featured.path),
            source.clone(),
            self.config.featured.fallback_query,
        );

        Ok(Session::new(
            source,
            featured,
            RecipeListStore::new(page_size),
            FavoritesStore::open(storage)?,
        ))
    }
}

fn default_storage_path() -> Result<PathBuf, FinderError> {
    ProjectDirs::from("", "", "recipe-finder")
        .map(|dirs| dirs.data_dir().join(STORE_FILE))
        .ok_or_else(|| {
            FinderError::BuilderError("Could not determine a data directory".to_string())
        })
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for a browsing session
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().page_size(12);
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
