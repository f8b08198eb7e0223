//! Relation roles - the semantic meaning of an edge

/// Semantic role of a relation between two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationRole {
    /// The anchor is solved by the related entity
    SolvedBy,

    /// The anchor is informed by the related entity
    InformedBy,

    /// The anchor was derived from the related entity
    DerivedFrom,

    /// The two entities address similar ground (symmetric)
    SimilarTo,

    /// The anchor is a parent of the related entity
    ParentOf,

    /// The anchor is a child of the related entity
    ChildOf,

    /// The anchor requires the related policy to proceed
    RequiresPolicy,

    /// The anchor is enabled by the related policy
    EnabledByPolicy,

    /// The anchor generates the related policy
    GeneratesPolicy,
}

impl RelationRole {
    /// Get the wire name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationRole::SolvedBy => "solved_by",
            RelationRole::InformedBy => "informed_by",
            RelationRole::DerivedFrom => "derived_from",
            RelationRole::SimilarTo => "similar_to",
            RelationRole::ParentOf => "parent_of",
            RelationRole::ChildOf => "child_of",
            RelationRole::RequiresPolicy => "requires_policy",
            RelationRole::EnabledByPolicy => "enabled_by_policy",
            RelationRole::GeneratesPolicy => "generates_policy",
        }
    }

    /// Parse a role from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "solved_by" => Some(RelationRole::SolvedBy),
            "informed_by" => Some(RelationRole::InformedBy),
            "derived_from" => Some(RelationRole::DerivedFrom),
            "similar_to" => Some(RelationRole::SimilarTo),
            "parent_of" => Some(RelationRole::ParentOf),
            "child_of" => Some(RelationRole::ChildOf),
            "requires_policy" => Some(RelationRole::RequiresPolicy),
            "enabled_by_policy" => Some(RelationRole::EnabledByPolicy),
            "generates_policy" => Some(RelationRole::GeneratesPolicy),
            _ => None,
        }
    }

    /// Whether this role reads the same from both sides of the edge
    pub fn is_symmetric(&self) -> bool {
        matches!(self, RelationRole::SimilarTo)
    }
}

impl std::str::FromStr for RelationRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relation role: {}", s))
    }
}

impl std::fmt::Display for RelationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [RelationRole; 9] = [
        RelationRole::SolvedBy,
        RelationRole::InformedBy,
        RelationRole::DerivedFrom,
        RelationRole::SimilarTo,
        RelationRole::ParentOf,
        RelationRole::ChildOf,
        RelationRole::RequiresPolicy,
        RelationRole::EnabledByPolicy,
        RelationRole::GeneratesPolicy,
    ];

    #[test]
    fn test_role_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(RelationRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_role_parse_invalid() {
        assert_eq!(RelationRole::parse("blocks"), None);
    }

    #[test]
    fn test_only_similar_to_is_symmetric() {
        for role in ALL_ROLES {
            assert_eq!(role.is_symmetric(), role == RelationRole::SimilarTo);
        }
    }
}
