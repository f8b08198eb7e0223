//! Static registry of matcher configurations
//!
//! A matcher configuration declares which two catalogs are scanned and
//! which semantic role the resulting relations carry. The registry is
//! the closed set of supported pairings; every entry places a challenge
//! on at least one side, because only challenge-touching relations are
//! representable by the current graph shape.

use civigraph_domain::{EntityType, RelationRole};

/// System-wide acceptance threshold for match scores (inclusive)
pub const DEFAULT_MATCH_THRESHOLD: u8 = 70;

/// A declared source/target pairing driving a matching run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Stable identifier used to select the matcher
    pub id: &'static str,

    /// Catalog the outer loop iterates over
    pub source_type: EntityType,

    /// Catalog the inner loop iterates over
    pub target_type: EntityType,

    /// Role carried by every relation this matcher creates
    pub relation_role: RelationRole,

    /// Acceptance threshold for this matcher (score >= threshold)
    pub threshold: u8,
}

impl MatcherConfig {
    const fn new(
        id: &'static str,
        source_type: EntityType,
        target_type: EntityType,
        relation_role: RelationRole,
    ) -> Self {
        Self {
            id,
            source_type,
            target_type,
            relation_role,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

/// The enumerated matcher configurations
///
/// Each entry covers one supported semantic pairing. The threshold is
/// the system-wide constant unless a future entry overrides it.
pub const BUILTIN_MATCHERS: [MatcherConfig; 7] = [
    // Solutions that could address an open challenge
    MatcherConfig::new(
        "challenge-solution",
        EntityType::Challenge,
        EntityType::Solution,
        RelationRole::SolvedBy,
    ),
    // Pilots elsewhere that could scale to a similar challenge
    MatcherConfig::new(
        "pilot-challenge",
        EntityType::Pilot,
        EntityType::Challenge,
        RelationRole::SolvedBy,
    ),
    // Challenges covering similar ground
    MatcherConfig::new(
        "challenge-challenge",
        EntityType::Challenge,
        EntityType::Challenge,
        RelationRole::SimilarTo,
    ),
    // R&D projects whose findings inform a challenge
    MatcherConfig::new(
        "rd-project-challenge",
        EntityType::RdProject,
        EntityType::Challenge,
        RelationRole::InformedBy,
    ),
    // Programs a challenge was derived from
    MatcherConfig::new(
        "challenge-program",
        EntityType::Challenge,
        EntityType::Program,
        RelationRole::DerivedFrom,
    ),
    // Policies that enable work on a challenge
    MatcherConfig::new(
        "policy-challenge",
        EntityType::Policy,
        EntityType::Challenge,
        RelationRole::EnabledByPolicy,
    ),
    // Open R&D calls relevant to a challenge
    MatcherConfig::new(
        "challenge-rd-call",
        EntityType::Challenge,
        EntityType::RdCall,
        RelationRole::InformedBy,
    ),
];

/// All matcher configurations, in registry order
pub fn builtin_matchers() -> &'static [MatcherConfig] {
    &BUILTIN_MATCHERS
}

/// Look up a matcher configuration by id
pub fn find_matcher(id: &str) -> Option<&'static MatcherConfig> {
    BUILTIN_MATCHERS.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids_are_unique() {
        let mut ids: Vec<_> = builtin_matchers().iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), builtin_matchers().len());
    }

    #[test]
    fn test_every_entry_touches_a_challenge() {
        // The anchor-resolution rule can only place a challenge side
        for matcher in builtin_matchers() {
            let touches_challenge = matcher.source_type == EntityType::Challenge
                || matcher.target_type == EntityType::Challenge;
            assert!(touches_challenge, "{} has no challenge side", matcher.id);
        }
    }

    #[test]
    fn test_default_threshold() {
        for matcher in builtin_matchers() {
            assert_eq!(matcher.threshold, DEFAULT_MATCH_THRESHOLD);
        }
    }

    #[test]
    fn test_find_matcher() {
        let matcher = find_matcher("challenge-solution").unwrap();
        assert_eq!(matcher.source_type, EntityType::Challenge);
        assert_eq!(matcher.target_type, EntityType::Solution);
        assert_eq!(matcher.relation_role, RelationRole::SolvedBy);

        assert!(find_matcher("no-such-matcher").is_none());
    }
}
