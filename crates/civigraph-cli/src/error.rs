//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Relation store error
    #[error("Store error: {0}")]
    Store(#[from] civigraph_store::StoreError),

    /// Matching run error
    #[error("{0}")]
    Match(#[from] civigraph_matcher::MatchError),

    /// Catalog snapshot error
    #[error("Catalog error: {0}")]
    Catalog(#[from] civigraph_matcher::CatalogError),

    /// Review error
    #[error("{0}")]
    Review(#[from] civigraph_review::ReviewError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
