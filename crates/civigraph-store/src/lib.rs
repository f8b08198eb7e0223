//! Civigraph Storage Layer
//!
//! Implements the RelationStore trait over SQLite.
//!
//! # Architecture
//!
//! - SQLite for relation records (schema in `schema.sql`)
//! - The uniqueness invariant `(anchor_entity_id, related_entity_type,
//!   related_entity_id, relation_role)` is enforced by a UNIQUE index,
//!   so it holds even when multiple clients race
//! - Batch creation is transactional: either every relation in the
//!   batch is persisted or none is
//!
//! # Examples
//!
//! ```no_run
//! use civigraph_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for relation operations
//! ```

#![warn(missing_docs)]

use civigraph_domain::traits::{RelationQuery, RelationStore};
use civigraph_domain::{
    CreatedVia, EntityType, Relation, RelationId, RelationRole, ReviewStatus,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Relation not found
    #[error("Relation not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A relation with the same uniqueness tuple already exists
    #[error("Duplicate relation: {key}")]
    Duplicate {
        /// Display form of the conflicting uniqueness tuple
        key: String,
    },

    /// Attempted to review a relation that is no longer pending
    #[error("Invalid transition: relation {id} is already {status}")]
    InvalidTransition {
        /// The relation id
        id: String,
        /// Its current (terminal) status
        status: String,
    },
}

/// SQLite-based implementation of RelationStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its
/// own SqliteStore instance; the UNIQUE index keeps the graph invariant
/// intact across concurrent writers.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Convert RelationId to bytes for storage
    fn relation_id_to_bytes(id: RelationId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to RelationId
    fn bytes_to_relation_id(bytes: &[u8]) -> Result<RelationId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for RelationId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(RelationId::from_value(u128::from_be_bytes(arr)))
    }

    /// Map a result row to a Relation
    fn row_to_relation(row: &Row<'_>) -> rusqlite::Result<Relation> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_relation_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        let type_str: String = row.get(2)?;
        let related_entity_type = EntityType::parse(&type_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                Box::new(StoreError::InvalidData(format!(
                    "Unknown entity type: {}",
                    type_str
                ))),
            )
        })?;

        let role_str: String = row.get(4)?;
        let relation_role = RelationRole::parse(&role_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                Box::new(StoreError::InvalidData(format!(
                    "Unknown relation role: {}",
                    role_str
                ))),
            )
        })?;

        let via_str: String = row.get(7)?;
        let created_via = CreatedVia::parse(&via_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                7,
                rusqlite::types::Type::Text,
                Box::new(StoreError::InvalidData(format!(
                    "Unknown provenance: {}",
                    via_str
                ))),
            )
        })?;

        let status_str: String = row.get(8)?;
        let status = ReviewStatus::parse(&status_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                8,
                rusqlite::types::Type::Text,
                Box::new(StoreError::InvalidData(format!(
                    "Unknown status: {}",
                    status_str
                ))),
            )
        })?;

        let reviewed_at: Option<i64> = row.get(13)?;

        Ok(Relation {
            id,
            anchor_entity_id: row.get(1)?,
            related_entity_type,
            related_entity_id: row.get(3)?,
            relation_role,
            strength: row.get::<_, i64>(5)? as u8,
            bidirectional: row.get(6)?,
            created_via,
            status,
            reviewed: row.get(9)?,
            notes: row.get(10)?,
            created_at: row.get::<_, i64>(11)? as u64,
            reviewed_by: row.get(12)?,
            reviewed_at: reviewed_at.map(|t| t as u64),
        })
    }

    /// All relation columns, in the order row_to_relation expects
    const COLUMNS: &'static str = "id, anchor_entity_id, related_entity_type, related_entity_id, \
         relation_role, strength, bidirectional, created_via, status, \
         reviewed, notes, created_at, reviewed_by, reviewed_at";

    /// Map a rusqlite error on insert to Duplicate when the UNIQUE
    /// index rejected the row
    fn map_insert_error(e: rusqlite::Error, relation: &Relation) -> StoreError {
        match &e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::Duplicate {
                    key: relation.key().to_string(),
                }
            }
            _ => StoreError::Database(e),
        }
    }

    /// Insert one relation via the given connection-like executor
    fn insert_relation(conn: &Connection, relation: &Relation) -> Result<(), StoreError> {
        if relation.strength > Relation::MAX_STRENGTH {
            return Err(StoreError::InvalidData(format!(
                "Strength {} is outside [0, 100]",
                relation.strength
            )));
        }

        conn.execute(
            "INSERT INTO relations (id, anchor_entity_id, related_entity_type, related_entity_id, \
             relation_role, strength, bidirectional, created_via, status, reviewed, notes, \
             created_at, reviewed_by, reviewed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                Self::relation_id_to_bytes(relation.id),
                &relation.anchor_entity_id,
                relation.related_entity_type.as_str(),
                &relation.related_entity_id,
                relation.relation_role.as_str(),
                relation.strength as i64,
                relation.bidirectional,
                relation.created_via.as_str(),
                relation.status.as_str(),
                relation.reviewed,
                &relation.notes,
                relation.created_at as i64,
                &relation.reviewed_by,
                relation.reviewed_at.map(|t| t as i64),
            ],
        )
        .map_err(|e| Self::map_insert_error(e, relation))?;

        Ok(())
    }
}

impl RelationStore for SqliteStore {
    type Error = StoreError;

    fn list_relations(&self, query: &RelationQuery) -> Result<Vec<Relation>, Self::Error> {
        let mut sql = format!("SELECT {} FROM relations WHERE 1=1", Self::COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(entity_type) = query.related_entity_type {
            sql.push_str(" AND related_entity_type = ?");
            params.push(Box::new(entity_type.as_str()));
        }

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            params.push(Box::new(status.as_str()));
        }

        if let Some(via) = query.created_via {
            sql.push_str(" AND created_via = ?");
            params.push(Box::new(via.as_str()));
        }

        if let Some(anchor) = &query.anchor_entity_id {
            sql.push_str(" AND anchor_entity_id = ?");
            params.push(Box::new(anchor.clone()));
        }

        if let Some(text) = &query.text {
            sql.push_str(
                " AND (anchor_entity_id LIKE ? OR related_entity_id LIKE ? OR notes LIKE ?)",
            );
            let pattern = format!("%{}%", text);
            params.push(Box::new(pattern.clone()));
            params.push(Box::new(pattern.clone()));
            params.push(Box::new(pattern));
        }

        sql.push_str(" ORDER BY created_at DESC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let relations = stmt
            .query_map(&param_refs[..], Self::row_to_relation)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(relations)
    }

    fn get_relation(&self, id: RelationId) -> Result<Option<Relation>, Self::Error> {
        let id_bytes = Self::relation_id_to_bytes(id);

        let relation = self
            .conn
            .query_row(
                &format!("SELECT {} FROM relations WHERE id = ?1", Self::COLUMNS),
                params![&id_bytes],
                Self::row_to_relation,
            )
            .optional()?;

        Ok(relation)
    }

    fn create_relation(&mut self, relation: Relation) -> Result<RelationId, Self::Error> {
        let id = relation.id;
        Self::insert_relation(&self.conn, &relation)?;
        Ok(id)
    }

    fn create_batch(&mut self, relations: Vec<Relation>) -> Result<usize, Self::Error> {
        if relations.is_empty() {
            return Ok(0);
        }

        let count = relations.len();
        let tx = self.conn.transaction()?;

        for relation in &relations {
            // Any failure here drops the transaction and rolls back
            // every insert already made in this batch
            Self::insert_relation(&tx, relation)?;
        }

        tx.commit()?;
        tracing::debug!("Committed batch of {} relations", count);

        Ok(count)
    }

    fn delete_relation(&mut self, id: RelationId) -> Result<(), Self::Error> {
        let id_bytes = Self::relation_id_to_bytes(id);

        let rows = self
            .conn
            .execute("DELETE FROM relations WHERE id = ?1", params![&id_bytes])?;

        if rows == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn update_status(
        &mut self,
        id: RelationId,
        decision: ReviewStatus,
        decided_by: Option<&str>,
        decided_at: u64,
    ) -> Result<Relation, Self::Error> {
        if !decision.is_terminal() {
            return Err(StoreError::InvalidData(format!(
                "Review decision must be terminal, got {}",
                decision
            )));
        }

        let id_bytes = Self::relation_id_to_bytes(id);

        // Guarded transition: succeeds only while the relation is still
        // pending, so the first decision wins and terminal states stay
        // frozen under concurrent reviewers
        let rows = self.conn.execute(
            "UPDATE relations SET status = ?1, reviewed = 1, reviewed_by = ?2, reviewed_at = ?3
             WHERE id = ?4 AND status = 'pending'",
            params![
                decision.as_str(),
                decided_by,
                decided_at as i64,
                &id_bytes
            ],
        )?;

        if rows == 0 {
            return match self.get_relation(id)? {
                Some(existing) => Err(StoreError::InvalidTransition {
                    id: id.to_string(),
                    status: existing.status.as_str().to_string(),
                }),
                None => Err(StoreError::NotFound(id.to_string())),
            };
        }

        self.get_relation(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn relations_for(&self, entity_id: &str) -> Result<Vec<Relation>, Self::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM relations
             WHERE anchor_entity_id = ?1 OR (bidirectional = 1 AND related_entity_id = ?1)",
            Self::COLUMNS
        ))?;

        let relations = stmt
            .query_map(params![entity_id], Self::row_to_relation)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(relations)
    }
}
