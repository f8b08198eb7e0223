//! Civigraph Review
//!
//! Applies human review decisions to pending relations.
//!
//! The reviewer enforces the review state machine: a pending relation
//! accepts exactly one terminal decision (approved or rejected), and a
//! decided relation never changes again. Decisions on already-decided
//! relations are either rejected with an error or ignored, per
//! configuration.
//!
//! # Examples
//!
//! ```no_run
//! use civigraph_review::{ReviewConfig, Reviewer};
//! use civigraph_domain::{RelationId, ReviewStatus};
//! use civigraph_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::new("civigraph.db")?;
//! let reviewer = Reviewer::default_config();
//!
//! let id = RelationId::from_string("0190a8b0-1234-7890-abcd-ef0123456789")?;
//! let outcome = reviewer.review(&mut store, id, ReviewStatus::Approved, Some("analyst"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod reviewer;

pub use config::{ReviewConfig, TerminalPolicy};
pub use error::ReviewError;
pub use reviewer::{ReviewOutcome, Reviewer};
