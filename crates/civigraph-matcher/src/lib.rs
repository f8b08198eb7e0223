//! Civigraph Matching Engine
//!
//! Runs AI-assisted matching between entity catalogs: for a configured
//! source/target type pairing, every pair of embedded entities is
//! scored by cosine similarity, candidates at or above the threshold
//! become pending relations, and the surviving candidates are committed
//! to the relation store as a single batch.
//!
//! # Components
//!
//! - **similarity**: the pure scoring function
//! - **registry**: the static matcher configuration registry
//! - **catalog**: an in-memory Entity Catalog Provider, loadable from a
//!   JSON snapshot
//! - **progress**: progress events and cooperative cancellation
//! - **orchestrator**: the match run itself
//!
//! # Usage
//!
//! ```no_run
//! use civigraph_matcher::{find_matcher, InMemoryCatalog, Orchestrator, ProgressSink};
//! use civigraph_store::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = InMemoryCatalog::load("catalog.json")?;
//!     let mut store = SqliteStore::new("civigraph.db")?;
//!     let matcher = find_matcher("challenge-solution").unwrap();
//!
//!     let orchestrator = Orchestrator::default_config();
//!     let outcome = orchestrator
//!         .run(matcher, &catalog, &mut store, &ProgressSink::silent())
//!         .await?;
//!     println!("{}", outcome.summary.report());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod catalog;
mod error;
pub mod orchestrator;
pub mod progress;
pub mod registry;
pub mod similarity;

pub use catalog::{CatalogError, InMemoryCatalog};
pub use error::MatchError;
pub use orchestrator::{MatchOutcome, MatchSettings, MatchSummary, Orchestrator};
pub use progress::{CancelHandle, MatchProgress, ProgressSink};
pub use registry::{builtin_matchers, find_matcher, MatcherConfig, DEFAULT_MATCH_THRESHOLD};
pub use similarity::{cosine_similarity, match_score};
