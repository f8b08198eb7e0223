//! Visibility resolver - which relations an entity's view contains
//!
//! A relation is visible from its anchor side always, and from its
//! related side only when the bidirectional flag is set. The resolver
//! is a pure function over a graph snapshot; it holds no state and can
//! be re-derived at any time.

use crate::Relation;

/// Relations visible from the perspective of `entity_id`
///
/// Returns every relation anchored at the entity, unioned with every
/// bidirectional relation pointing at it.
///
/// # Examples
///
/// ```
/// use civigraph_domain::{CreatedVia, EntityType, Relation, RelationRole};
/// use civigraph_domain::visibility::relations_for;
///
/// let relation = Relation::new(
///     "challenge#1".to_string(),
///     EntityType::Solution,
///     "solution#9".to_string(),
///     RelationRole::SimilarTo,
///     80,
///     true,
///     CreatedVia::Manual,
///     1_700_000_000,
/// );
///
/// let graph = vec![relation];
/// assert_eq!(relations_for(&graph, "challenge#1").len(), 1);
/// assert_eq!(relations_for(&graph, "solution#9").len(), 1);
/// ```
pub fn relations_for<'a>(relations: &'a [Relation], entity_id: &str) -> Vec<&'a Relation> {
    relations
        .iter()
        .filter(|r| {
            r.anchor_entity_id == entity_id
                || (r.bidirectional && r.related_entity_id == entity_id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CreatedVia, EntityType, RelationRole};

    fn relation(anchor: &str, related: &str, bidirectional: bool) -> Relation {
        Relation::new(
            anchor.to_string(),
            EntityType::Solution,
            related.to_string(),
            RelationRole::SolvedBy,
            75,
            bidirectional,
            CreatedVia::Manual,
            1_700_000_000,
        )
    }

    #[test]
    fn test_anchor_always_sees_relation() {
        let graph = vec![relation("challenge#1", "solution#2", false)];

        let visible = relations_for(&graph, "challenge#1");
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_related_side_needs_bidirectional_flag() {
        let graph = vec![
            relation("challenge#1", "solution#2", false),
            relation("challenge#3", "solution#2", true),
        ];

        let visible = relations_for(&graph, "solution#2");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].anchor_entity_id, "challenge#3");
    }

    #[test]
    fn test_bidirectional_visible_from_both_sides() {
        let graph = vec![relation("challenge#1", "solution#2", true)];

        assert_eq!(relations_for(&graph, "challenge#1").len(), 1);
        assert_eq!(relations_for(&graph, "solution#2").len(), 1);
    }

    #[test]
    fn test_unrelated_entity_sees_nothing() {
        let graph = vec![relation("challenge#1", "solution#2", true)];

        assert!(relations_for(&graph, "pilot#7").is_empty());
    }
}
