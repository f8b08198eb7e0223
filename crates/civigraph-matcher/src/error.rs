//! Error types for matching runs

use thiserror::Error;

/// Errors that can terminate a matching run
///
/// A run always terminates with either a complete summary or one of
/// these errors; it never leaves the caller without a final status.
/// Every error leaves the relation graph unmodified.
#[derive(Error, Debug)]
pub enum MatchError {
    /// No matcher registered under the requested id
    #[error("Unknown matcher: {0}")]
    UnknownMatcher(String),

    /// Source or target catalog has no embedded entities to match
    #[error(
        "No embeddings available: {source_with_embedding}/{source_total} source and \
         {target_with_embedding}/{target_total} target entities usable"
    )]
    NoEmbeddings {
        /// Source entities fetched from the catalog
        source_total: usize,
        /// Source entities with a usable embedding
        source_with_embedding: usize,
        /// Target entities fetched from the catalog
        target_total: usize,
        /// Target entities with a usable embedding
        target_with_embedding: usize,
    },

    /// Catalog provider failure
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Persistence failure; the whole batch is considered not created
    #[error("Store error: {0}")]
    Store(String),

    /// The run was cancelled before committing
    #[error("Match run cancelled")]
    Cancelled,
}
