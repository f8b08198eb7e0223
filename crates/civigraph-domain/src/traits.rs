//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates
//! (civigraph-store, civigraph-matcher).

use crate::{CatalogEntity, CreatedVia, EntityType, Relation, RelationId, ReviewStatus};

/// Trait for persisting and querying the relation graph
///
/// Implemented by the infrastructure layer (civigraph-store)
pub trait RelationStore {
    /// Error type for store operations
    type Error;

    /// List relations matching criteria
    fn list_relations(&self, query: &RelationQuery) -> Result<Vec<Relation>, Self::Error>;

    /// Get a relation by id
    fn get_relation(&self, id: RelationId) -> Result<Option<Relation>, Self::Error>;

    /// Persist a single relation
    fn create_relation(&mut self, relation: Relation) -> Result<RelationId, Self::Error>;

    /// Persist a batch of relations, all-or-nothing
    ///
    /// If any relation in the batch violates the uniqueness invariant,
    /// no relation in the batch is persisted.
    fn create_batch(&mut self, relations: Vec<Relation>) -> Result<usize, Self::Error>;

    /// Delete a relation by id
    fn delete_relation(&mut self, id: RelationId) -> Result<(), Self::Error>;

    /// Record a review decision on a pending relation
    ///
    /// The transition is guarded: it succeeds only while the relation
    /// is still pending, so a terminal status can never be overwritten.
    fn update_status(
        &mut self,
        id: RelationId,
        decision: ReviewStatus,
        decided_by: Option<&str>,
        decided_at: u64,
    ) -> Result<Relation, Self::Error>;

    /// Relations visible from the perspective of one entity
    fn relations_for(&self, entity_id: &str) -> Result<Vec<Relation>, Self::Error>;
}

/// Query criteria for browsing relations
#[derive(Debug, Clone, Default)]
pub struct RelationQuery {
    /// Filter by related entity type
    pub related_entity_type: Option<EntityType>,

    /// Filter by review status
    pub status: Option<ReviewStatus>,

    /// Filter by provenance (manual vs ai)
    pub created_via: Option<CreatedVia>,

    /// Filter by anchor entity id
    pub anchor_entity_id: Option<String>,

    /// Substring match against entity ids and notes
    pub text: Option<String>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

/// Trait for supplying candidate entities per type
///
/// Implemented by catalog providers (civigraph-matcher ships an
/// in-memory JSON-backed one). No ordering guarantee is given.
pub trait EntityCatalog {
    /// Error type for catalog operations
    type Error;

    /// List all known entities of one type
    fn list(&self, entity_type: EntityType) -> Result<Vec<CatalogEntity>, Self::Error>;
}
