//! In-memory Entity Catalog Provider
//!
//! The matcher only needs the catalog contract: per entity type, a list
//! of `{id, name, embedding?}` records with no ordering guarantee. This
//! module provides an in-memory implementation loadable from a JSON
//! snapshot, which is how precomputed embeddings reach the engine.
//!
//! # Snapshot format
//!
//! ```json
//! {
//!   "challenge": [
//!     { "id": "challenge#1", "name": "Flood monitoring", "embedding": [0.1, 0.9] }
//!   ],
//!   "solution": [
//!     { "id": "solution#9", "name": "Sensor mesh", "embedding": null }
//!   ]
//! }
//! ```

use civigraph_domain::traits::EntityCatalog;
use civigraph_domain::{CatalogEntity, EntityType};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or querying a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error reading a snapshot file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed snapshot JSON
    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A snapshot key is not a known entity type
    #[error("Unknown entity type in snapshot: {0}")]
    UnknownEntityType(String),
}

/// Wire shape of one snapshot entity
#[derive(Debug, Deserialize)]
struct SnapshotEntity {
    id: String,
    name: String,
    #[serde(default)]
    embedding: Option<Vec<f32>>,
}

/// In-memory catalog keyed by entity type
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entities: HashMap<EntityType, Vec<CatalogEntity>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entity under the given type
    pub fn insert(&mut self, entity_type: EntityType, entity: CatalogEntity) {
        self.entities.entry(entity_type).or_default().push(entity);
    }

    /// Parse a catalog from snapshot JSON
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, Vec<SnapshotEntity>> = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for (key, entries) in raw {
            let entity_type = EntityType::parse(&key)
                .ok_or_else(|| CatalogError::UnknownEntityType(key.clone()))?;

            for entry in entries {
                catalog.insert(
                    entity_type,
                    CatalogEntity {
                        id: entry.id,
                        name: entry.name,
                        embedding: entry.embedding,
                    },
                );
            }
        }

        Ok(catalog)
    }

    /// Load a catalog from a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Total entity count across all types
    pub fn len(&self) -> usize {
        self.entities.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no entities
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntityCatalog for InMemoryCatalog {
    type Error = CatalogError;

    fn list(&self, entity_type: EntityType) -> Result<Vec<CatalogEntity>, Self::Error> {
        Ok(self.entities.get(&entity_type).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "challenge": [
            { "id": "challenge#1", "name": "Flood monitoring", "embedding": [0.1, 0.9] },
            { "id": "challenge#2", "name": "Traffic congestion" }
        ],
        "solution": [
            { "id": "solution#9", "name": "Sensor mesh", "embedding": null }
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let catalog = InMemoryCatalog::from_json_str(SNAPSHOT).unwrap();
        assert_eq!(catalog.len(), 3);

        let challenges = catalog.list(EntityType::Challenge).unwrap();
        assert_eq!(challenges.len(), 2);
        assert!(challenges[0].has_embedding());
        assert!(!challenges[1].has_embedding(), "Missing embedding maps to None");
    }

    #[test]
    fn test_unknown_type_listed_empty() {
        let catalog = InMemoryCatalog::from_json_str(SNAPSHOT).unwrap();
        assert!(catalog.list(EntityType::Pilot).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_snapshot_key_rejected() {
        let json = r#"{ "idea": [] }"#;
        let result = InMemoryCatalog::from_json_str(json);
        assert!(matches!(result, Err(CatalogError::UnknownEntityType(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = InMemoryCatalog::from_json_str("{ not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_insert_and_list() {
        let mut catalog = InMemoryCatalog::new();
        assert!(catalog.is_empty());

        catalog.insert(
            EntityType::Pilot,
            CatalogEntity {
                id: "pilot#1".to_string(),
                name: "Harbor drone trial".to_string(),
                embedding: Some(vec![1.0, 0.0]),
            },
        );

        assert_eq!(catalog.list(EntityType::Pilot).unwrap().len(), 1);
    }
}
