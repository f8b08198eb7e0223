//! Entity types and the catalog record shape

/// Kind of entity a relation may reference
///
/// The catalog kinds are a closed set; using an enum (rather than
/// string keys) gives exhaustiveness checking wherever code dispatches
/// on entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// An innovation challenge posted by a government body
    Challenge,

    /// A proposed or existing solution
    Solution,

    /// A pilot deployment of a solution
    Pilot,

    /// A research & development project
    RdProject,

    /// A funding or innovation program
    Program,

    /// A policy instrument
    Policy,

    /// An open R&D call
    RdCall,
}

impl EntityType {
    /// All entity types, in stable order
    pub const ALL: [EntityType; 7] = [
        EntityType::Challenge,
        EntityType::Solution,
        EntityType::Pilot,
        EntityType::RdProject,
        EntityType::Program,
        EntityType::Policy,
        EntityType::RdCall,
    ];

    /// Get the wire name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Challenge => "challenge",
            EntityType::Solution => "solution",
            EntityType::Pilot => "pilot",
            EntityType::RdProject => "rd_project",
            EntityType::Program => "program",
            EntityType::Policy => "policy",
            EntityType::RdCall => "rd_call",
        }
    }

    /// Parse an entity type from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "challenge" => Some(EntityType::Challenge),
            "solution" => Some(EntityType::Solution),
            "pilot" => Some(EntityType::Pilot),
            "rd_project" => Some(EntityType::RdProject),
            "program" => Some(EntityType::Program),
            "policy" => Some(EntityType::Policy),
            "rd_call" => Some(EntityType::RdCall),
            _ => None,
        }
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid entity type: {}", s))
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry as supplied by an Entity Catalog Provider
///
/// The embedding is optional: entities whose embedding has not been
/// generated yet (or arrived corrupt) carry `None` and are excluded
/// from matching.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntity {
    /// Opaque entity identifier
    pub id: String,

    /// Human-readable display name
    pub name: String,

    /// Embedding vector, if one has been generated for this entity
    pub embedding: Option<Vec<f32>>,
}

impl CatalogEntity {
    /// Whether this entity carries a usable (non-empty) embedding
    pub fn has_embedding(&self) -> bool {
        self.embedding.as_ref().is_some_and(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_roundtrip() {
        for ty in EntityType::ALL {
            assert_eq!(EntityType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn test_entity_type_parse_case_insensitive() {
        assert_eq!(EntityType::parse("Challenge"), Some(EntityType::Challenge));
        assert_eq!(EntityType::parse("RD_PROJECT"), Some(EntityType::RdProject));
    }

    #[test]
    fn test_entity_type_parse_invalid() {
        assert_eq!(EntityType::parse("idea"), None);
        assert_eq!(EntityType::parse(""), None);
    }

    #[test]
    fn test_has_embedding() {
        let mut entity = CatalogEntity {
            id: "challenge#1".to_string(),
            name: "Flood monitoring".to_string(),
            embedding: None,
        };
        assert!(!entity.has_embedding());

        entity.embedding = Some(vec![]);
        assert!(!entity.has_embedding(), "Empty embedding is unusable");

        entity.embedding = Some(vec![0.1, 0.2]);
        assert!(entity.has_embedding());
    }
}
