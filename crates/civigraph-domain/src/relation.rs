//! Relation module - the sole persisted record of the civigraph core

use crate::{CreatedVia, EntityType, RelationRole, ReviewStatus};
use std::fmt;

/// Unique identifier for a relation based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability for temporal queries
/// - 128-bit uniqueness
/// - RFC 9562-standard format with broad ecosystem support
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelationId(u128);

impl RelationId {
    /// Generate a new UUIDv7-based RelationId
    ///
    /// # Examples
    ///
    /// ```
    /// use civigraph_domain::RelationId;
    ///
    /// let id = RelationId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RelationId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a RelationId from a UUIDv7 string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for RelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// The uniqueness tuple of a relation
///
/// No two relations may share the same key, neither among persisted
/// relations nor within a batch being created. The key is what the
/// orchestrator dedups on and what the store's UNIQUE index covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationKey {
    /// Id of the entity that owns the relation record
    pub anchor_entity_id: String,

    /// Kind of the other side
    pub related_entity_type: EntityType,

    /// Id of the other side
    pub related_entity_id: String,

    /// Semantic role of the edge
    pub relation_role: RelationRole,
}

impl fmt::Display for RelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.anchor_entity_id,
            self.related_entity_type,
            self.related_entity_id,
            self.relation_role
        )
    }
}

/// A typed edge between an anchor entity and a related entity
///
/// The anchor side owns the record; the related side is identified by
/// `(related_entity_type, related_entity_id)`. A bidirectional relation
/// is visible from both perspectives.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    /// Unique identifier
    pub id: RelationId,

    /// Id of the entity that owns the relation record
    ///
    /// Not necessarily a challenge; it is the side chosen by the
    /// orchestrator's anchor rule.
    pub anchor_entity_id: String,

    /// Kind of the other side
    pub related_entity_type: EntityType,

    /// Id of the other side
    pub related_entity_id: String,

    /// Semantic role of the edge
    pub relation_role: RelationRole,

    /// Match confidence percentage in [0, 100]
    pub strength: u8,

    /// Whether the relation is visible from both sides
    pub bidirectional: bool,

    /// How the relation came to exist
    pub created_via: CreatedVia,

    /// Current review status
    pub status: ReviewStatus,

    /// True once a human decision has been recorded
    pub reviewed: bool,

    /// Free-text annotation (e.g. "AI-generated match (92% similarity)")
    pub notes: Option<String>,

    /// Creation timestamp (seconds since Unix epoch)
    pub created_at: u64,

    /// Who recorded the review decision, if any
    pub reviewed_by: Option<String>,

    /// When the review decision was recorded (seconds since Unix epoch)
    pub reviewed_at: Option<u64>,
}

impl Relation {
    /// Maximum legal strength value
    pub const MAX_STRENGTH: u8 = 100;

    /// Create a new pending, unreviewed relation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        anchor_entity_id: String,
        related_entity_type: EntityType,
        related_entity_id: String,
        relation_role: RelationRole,
        strength: u8,
        bidirectional: bool,
        created_via: CreatedVia,
        created_at: u64,
    ) -> Self {
        debug_assert!(strength <= Self::MAX_STRENGTH, "Strength must be in [0, 100]");

        Self {
            id: RelationId::new(),
            anchor_entity_id,
            related_entity_type,
            related_entity_id,
            relation_role,
            strength,
            bidirectional,
            created_via,
            status: ReviewStatus::Pending,
            reviewed: false,
            notes: None,
            created_at,
            reviewed_by: None,
            reviewed_at: None,
        }
    }

    /// The uniqueness tuple of this relation
    pub fn key(&self) -> RelationKey {
        RelationKey {
            anchor_entity_id: self.anchor_entity_id.clone(),
            related_entity_type: self.related_entity_type,
            related_entity_id: self.related_entity_id.clone(),
            relation_role: self.relation_role,
        }
    }

    /// Whether this relation points an entity at itself
    ///
    /// Self-relations are forbidden when the related type equals the
    /// anchor's own type and the ids are equal.
    pub fn is_self_relation(&self, anchor_type: EntityType) -> bool {
        self.related_entity_type == anchor_type
            && self.anchor_entity_id == self.related_entity_id
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: UUIDv7 ordering matches u128 ordering
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = RelationId::from_value(a);
            let id_b = RelationId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
            prop_assert_eq!(id_a > id_b, a > b);
        }

        /// Property: Round-trip through string representation preserves ID
        #[test]
        fn test_id_string_roundtrip(value: u128) {
            let id = RelationId::from_value(value);
            let id_str = id.to_string();

            match RelationId::from_string(&id_str) {
                Ok(parsed) => prop_assert_eq!(id, parsed),
                Err(e) => return Err(TestCaseError::fail(e)),
            }
        }

        /// Property: Generated UUIDv7s have valid timestamps
        #[test]
        fn test_id_timestamp_validity(_n in 0..10) {
            let id = RelationId::new();
            let timestamp = id.timestamp();

            // Timestamp should be reasonable (after 2020, before 2100)
            let min_timestamp = 1577836800000u64; // 2020-01-01
            let max_timestamp = 4102444800000u64; // 2100-01-01

            prop_assert!(timestamp >= min_timestamp && timestamp <= max_timestamp,
                "Timestamp {} out of reasonable range", timestamp);
        }
    }
}
