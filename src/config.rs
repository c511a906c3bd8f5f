use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FinderConfig {
    /// Remote recipe API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Result paging
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Where favorites are persisted
    #[serde(default)]
    pub storage: StorageConfig,
    /// The "All" view
    #[serde(default)]
    pub featured: FeaturedConfig,
}

/// Configuration for the TheMealDB client
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL, without the trailing `search.php` / `lookup.php`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaginationConfig {
    /// Cards per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Path of the JSON key-value file. Falls back to the platform data directory.
    pub path: Option<PathBuf>,
}

/// Configuration for the featured ("All") listing
#[derive(Debug, Deserialize, Clone)]
pub struct FeaturedConfig {
    /// Local catalog file shaped like a search response
    #[serde(default = "default_featured_path")]
    pub path: PathBuf,
    /// Remote search used when the catalog cannot be read
    #[serde(default = "default_fallback_query")]
    pub fallback_query: String,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            path: default_featured_path(),
            fallback_query: default_fallback_query(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    12
}

fn default_featured_path() -> PathBuf {
    PathBuf::from("recipes.json")
}

fn default_fallback_query() -> String {
    "egg".to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables.
///
/// See [`FinderConfig::load`] for the precedence rules.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-finder").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
