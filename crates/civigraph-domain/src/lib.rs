//! Civigraph Domain Layer
//!
//! This crate contains the core domain model for the civigraph relation
//! hub. It defines the fundamental concepts, value objects, and trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Relation**: the sole persisted record of the core - a typed edge
//!   between an anchor entity and a related entity
//! - **Entity types**: the seven catalog kinds a relation may touch
//!   (challenge, solution, pilot, rd_project, program, policy, rd_call)
//! - **Relation roles**: the semantic meaning of an edge (solved_by,
//!   similar_to, requires_policy, ...)
//! - **Review status**: pending → approved | rejected, terminal states
//!   are frozen
//! - **Visibility**: which relations an entity's detail view sees,
//!   honoring the bidirectional flag
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No infrastructure dependencies (uuid only)
//! - Pure business logic only
//! - Trait definitions for the store and catalog seams; implementations
//!   live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod relation;
pub mod role;
pub mod status;
pub mod traits;
pub mod visibility;

// Re-exports for convenience
pub use entity::{CatalogEntity, EntityType};
pub use relation::{Relation, RelationId, RelationKey};
pub use role::RelationRole;
pub use status::{CreatedVia, ReviewStatus};
