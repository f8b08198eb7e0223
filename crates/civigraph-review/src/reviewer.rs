//! Review decision logic

use crate::{ReviewConfig, ReviewError, TerminalPolicy};
use civigraph_domain::traits::RelationStore;
use civigraph_domain::{Relation, RelationId, ReviewStatus};
use std::time::{SystemTime, UNIX_EPOCH};

/// Result of applying a review decision
#[derive(Debug, Clone)]
pub enum ReviewOutcome {
    /// The decision was recorded; carries the updated relation
    Applied(Relation),

    /// The relation was already decided and the policy treats that as
    /// a no-op; carries the standing decision
    Ignored {
        /// The relation that was targeted
        id: RelationId,
        /// Its standing decision
        status: ReviewStatus,
    },
}

/// The Reviewer applies terminal decisions to pending relations
pub struct Reviewer {
    config: ReviewConfig,
}

impl Reviewer {
    /// Create a new Reviewer with the given configuration
    pub fn new(config: ReviewConfig) -> Self {
        Self { config }
    }

    /// Create a Reviewer with default configuration
    pub fn default_config() -> Self {
        Self::new(ReviewConfig::default())
    }

    /// Apply a terminal decision to a relation
    ///
    /// Only `Approved` and `Rejected` are accepted; the decision is
    /// recorded with the reviewer name and the current timestamp.
    /// A relation that already carries a terminal decision is never
    /// modified: depending on the configured policy the request either
    /// fails with [`ReviewError::AlreadyReviewed`] or succeeds as
    /// [`ReviewOutcome::Ignored`].
    pub fn review<S: RelationStore>(
        &self,
        store: &mut S,
        id: RelationId,
        decision: ReviewStatus,
        reviewed_by: Option<&str>,
    ) -> Result<ReviewOutcome, ReviewError>
    where
        S::Error: std::fmt::Display,
    {
        if !decision.is_terminal() {
            return Err(ReviewError::InvalidDecision(decision));
        }

        let relation = store
            .get_relation(id)
            .map_err(|e| ReviewError::Store(e.to_string()))?
            .ok_or(ReviewError::NotFound(id))?;

        if relation.status.is_terminal() {
            return match self.config.on_terminal {
                TerminalPolicy::Reject => Err(ReviewError::AlreadyReviewed {
                    id,
                    status: relation.status,
                }),
                TerminalPolicy::Ignore => Ok(ReviewOutcome::Ignored {
                    id,
                    status: relation.status,
                }),
            };
        }

        let decided_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        // The store's guarded update is the arbiter under concurrent
        // decisions; a lost race surfaces as a store error here
        let updated = store
            .update_status(id, decision, reviewed_by, decided_at)
            .map_err(|e| ReviewError::Store(e.to_string()))?;

        tracing::info!(
            relation = %id,
            decision = %decision,
            reviewer = reviewed_by.unwrap_or("-"),
            "Review decision recorded"
        );

        Ok(ReviewOutcome::Applied(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civigraph_domain::{CreatedVia, EntityType, RelationRole};
    use civigraph_store::SqliteStore;

    fn store_with_pending() -> (SqliteStore, RelationId) {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let relation = Relation::new(
            "challenge#1".to_string(),
            EntityType::Solution,
            "solution#9".to_string(),
            RelationRole::SolvedBy,
            82,
            false,
            CreatedVia::Ai,
            1_700_000_000,
        );
        let id = store.create_relation(relation).unwrap();
        (store, id)
    }

    #[test]
    fn test_approve_pending_relation() {
        let (mut store, id) = store_with_pending();
        let reviewer = Reviewer::default_config();

        let outcome = reviewer
            .review(&mut store, id, ReviewStatus::Approved, Some("analyst"))
            .unwrap();

        match outcome {
            ReviewOutcome::Applied(relation) => {
                assert_eq!(relation.status, ReviewStatus::Approved);
                assert!(relation.reviewed);
                assert_eq!(relation.reviewed_by.as_deref(), Some("analyst"));
                assert!(relation.reviewed_at.is_some());
            }
            other => panic!("Expected Applied, got {:?}", other),
        }
    }

    #[test]
    fn test_reject_pending_relation() {
        let (mut store, id) = store_with_pending();
        let reviewer = Reviewer::default_config();

        let outcome = reviewer
            .review(&mut store, id, ReviewStatus::Rejected, None)
            .unwrap();

        match outcome {
            ReviewOutcome::Applied(relation) => {
                assert_eq!(relation.status, ReviewStatus::Rejected);
                assert_eq!(relation.reviewed_by, None);
            }
            other => panic!("Expected Applied, got {:?}", other),
        }
    }

    #[test]
    fn test_decided_relation_is_frozen() {
        let (mut store, id) = store_with_pending();
        let reviewer = Reviewer::default_config();

        reviewer
            .review(&mut store, id, ReviewStatus::Approved, Some("first"))
            .unwrap();

        let result = reviewer.review(&mut store, id, ReviewStatus::Rejected, Some("second"));
        match result {
            Err(ReviewError::AlreadyReviewed { status, .. }) => {
                assert_eq!(status, ReviewStatus::Approved);
            }
            other => panic!("Expected AlreadyReviewed, got {:?}", other.err()),
        }

        // First decision stands
        let relation = store.get_relation(id).unwrap().unwrap();
        assert_eq!(relation.status, ReviewStatus::Approved);
        assert_eq!(relation.reviewed_by.as_deref(), Some("first"));
    }

    #[test]
    fn test_ignore_policy_is_noop_on_decided() {
        let (mut store, id) = store_with_pending();
        let reviewer = Reviewer::new(ReviewConfig::lenient());

        reviewer
            .review(&mut store, id, ReviewStatus::Rejected, None)
            .unwrap();

        let outcome = reviewer
            .review(&mut store, id, ReviewStatus::Approved, None)
            .unwrap();
        match outcome {
            ReviewOutcome::Ignored { status, .. } => {
                assert_eq!(status, ReviewStatus::Rejected);
            }
            other => panic!("Expected Ignored, got {:?}", other),
        }
    }

    #[test]
    fn test_pending_is_not_a_decision() {
        let (mut store, id) = store_with_pending();
        let reviewer = Reviewer::default_config();

        let result = reviewer.review(&mut store, id, ReviewStatus::Pending, None);
        assert!(matches!(result, Err(ReviewError::InvalidDecision(_))));

        let relation = store.get_relation(id).unwrap().unwrap();
        assert_eq!(relation.status, ReviewStatus::Pending);
    }

    #[test]
    fn test_missing_relation() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let reviewer = Reviewer::default_config();

        let result = reviewer.review(
            &mut store,
            RelationId::new(),
            ReviewStatus::Approved,
            None,
        );
        assert!(matches!(result, Err(ReviewError::NotFound(_))));
    }
}
