use thiserror::Error;

/// Errors that can occur while searching, browsing or persisting favorites
#[derive(Error, Debug)]
pub enum FinderError {
    /// HTTP request to the recipe API failed
    #[error("Failed to fetch from recipe API: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The API answered with something that is not a meals envelope
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The API returned no meals for the query or id
    #[error("No recipes found for \"{0}\"")]
    NotFound(String),

    /// The local featured catalog could not be read
    #[error("Featured catalog unavailable: {0}")]
    CatalogError(String),

    /// Writing to or reading from the local store failed
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Favorites could not be encoded or decoded
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl FinderError {
    /// The API had nothing to return, as opposed to failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FinderError::NotFound(_))
    }
}
