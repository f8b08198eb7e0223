//! Review error types

use civigraph_domain::{RelationId, ReviewStatus};
use thiserror::Error;

/// Errors that can occur while applying a review decision
#[derive(Error, Debug)]
pub enum ReviewError {
    /// No relation with the given id
    #[error("Relation not found: {0}")]
    NotFound(RelationId),

    /// The relation already carries a terminal decision
    #[error("Relation {id} was already reviewed ({status})")]
    AlreadyReviewed {
        /// The relation that was targeted
        id: RelationId,
        /// Its standing decision
        status: ReviewStatus,
    },

    /// The requested decision is not a terminal state
    #[error("Invalid decision: {0} is not a terminal review state")]
    InvalidDecision(ReviewStatus),

    /// Store failure while reading or updating the relation
    #[error("Store error: {0}")]
    Store(String),
}
