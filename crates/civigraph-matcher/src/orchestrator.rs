//! Match orchestrator - the AI-assisted matching run
//!
//! Given a matcher configuration, the orchestrator pulls both entity
//! lists from the catalog, scores every pair by cosine similarity,
//! resolves which side anchors the relation, dedups candidates against
//! the current graph and the in-run queue, and commits the survivors
//! to the store as one all-or-nothing batch of pending relations.
//!
//! The double loop is cooperative: it yields to the runtime
//! periodically and honors cancellation between source iterations.
//! Nothing is written until the very end, so a cancelled run commits
//! nothing.

use crate::progress::{MatchProgress, ProgressSink};
use crate::registry::MatcherConfig;
use crate::similarity::{cosine_similarity, match_score};
use crate::MatchError;
use civigraph_domain::traits::{EntityCatalog, RelationQuery, RelationStore};
use civigraph_domain::{CatalogEntity, CreatedVia, EntityType, Relation, RelationKey};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current timestamp in seconds since Unix epoch
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Tunables for a matching run
#[derive(Debug, Clone)]
pub struct MatchSettings {
    /// Override the matcher's acceptance threshold, if set
    pub threshold_override: Option<u8>,

    /// Yield to the runtime after this many source entities
    pub yield_every: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold_override: None,
            yield_every: 16,
        }
    }
}

/// Counters describing a completed matching run
///
/// The summary is the run's authoritative final status; progress
/// events are advisory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    /// Matcher that was executed
    pub matcher_id: String,

    /// Source entities whose inner loop completed
    pub sources_processed: usize,

    /// Pairs that received a similarity score
    pub pairs_scored: usize,

    /// Relations committed by this run
    pub created: usize,

    /// Entities excluded for lacking a usable embedding
    pub skipped_no_embedding: usize,

    /// Candidates dropped because the key tuple already existed
    pub skipped_duplicate: usize,

    /// Pairs the anchor rule could not place (no challenge side)
    pub skipped_unrepresentable: usize,

    /// Pairs scored below the acceptance threshold
    pub below_threshold: usize,
}

impl MatchSummary {
    /// Generate a human-readable report of the run
    pub fn report(&self) -> String {
        let mut lines = vec![
            format!("Match run: {}", self.matcher_id),
            format!("  Sources processed:  {}", self.sources_processed),
            format!("  Pairs scored:       {}", self.pairs_scored),
            format!("  Relations created:  {}", self.created),
        ];

        if self.skipped_no_embedding > 0 {
            lines.push(format!(
                "  Skipped (no embedding): {}",
                self.skipped_no_embedding
            ));
        }
        if self.skipped_duplicate > 0 {
            lines.push(format!("  Skipped (duplicate):    {}", self.skipped_duplicate));
        }
        if self.skipped_unrepresentable > 0 {
            lines.push(format!(
                "  Skipped (unrepresentable): {}",
                self.skipped_unrepresentable
            ));
        }
        if self.below_threshold > 0 {
            lines.push(format!("  Below threshold:        {}", self.below_threshold));
        }

        if self.created > 0 {
            lines.push(format!(
                "{} new pending relation(s) await review",
                self.created
            ));
        }

        lines.join("\n")
    }
}

/// Result of a successful matching run
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The relations committed by this run, in queue order
    pub created: Vec<Relation>,

    /// Final counters
    pub summary: MatchSummary,
}

/// The match orchestrator
///
/// # Examples
///
/// ```no_run
/// use civigraph_matcher::{find_matcher, InMemoryCatalog, Orchestrator, ProgressSink};
/// use civigraph_store::SqliteStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let catalog = InMemoryCatalog::load("catalog.json")?;
///     let mut store = SqliteStore::new("civigraph.db")?;
///     let matcher = find_matcher("challenge-solution").unwrap();
///
///     let outcome = Orchestrator::default_config()
///         .run(matcher, &catalog, &mut store, &ProgressSink::silent())
///         .await?;
///     println!("{}", outcome.summary.report());
///     Ok(())
/// }
/// ```
pub struct Orchestrator {
    settings: MatchSettings,
}

impl Orchestrator {
    /// Create an orchestrator with the given settings
    pub fn new(settings: MatchSettings) -> Self {
        Self { settings }
    }

    /// Create an orchestrator with default settings
    pub fn default_config() -> Self {
        Self::new(MatchSettings::default())
    }

    /// Execute one matching run
    ///
    /// Terminates with a complete outcome or an error; an error means
    /// the relation graph was left untouched by this run.
    pub async fn run<C, S>(
        &self,
        matcher: &MatcherConfig,
        catalog: &C,
        store: &mut S,
        sink: &ProgressSink,
    ) -> Result<MatchOutcome, MatchError>
    where
        C: EntityCatalog,
        S: RelationStore,
        C::Error: std::fmt::Display,
        S::Error: std::fmt::Display,
    {
        let threshold = self.settings.threshold_override.unwrap_or(matcher.threshold) as i32;

        let source_all = catalog
            .list(matcher.source_type)
            .map_err(|e| MatchError::Catalog(e.to_string()))?;
        let target_all = catalog
            .list(matcher.target_type)
            .map_err(|e| MatchError::Catalog(e.to_string()))?;

        let sources: Vec<&CatalogEntity> =
            source_all.iter().filter(|e| e.has_embedding()).collect();
        let targets: Vec<&CatalogEntity> =
            target_all.iter().filter(|e| e.has_embedding()).collect();

        let mut summary = MatchSummary {
            matcher_id: matcher.id.to_string(),
            ..Default::default()
        };
        summary.skipped_no_embedding = source_all.len() - sources.len();
        if matcher.source_type != matcher.target_type {
            summary.skipped_no_embedding += target_all.len() - targets.len();
        }

        if sources.is_empty() || targets.is_empty() {
            return Err(MatchError::NoEmbeddings {
                source_total: source_all.len(),
                source_with_embedding: sources.len(),
                target_total: target_all.len(),
                target_with_embedding: targets.len(),
            });
        }

        tracing::info!(
            matcher = matcher.id,
            sources = sources.len(),
            targets = targets.len(),
            threshold,
            "Starting match run"
        );

        // Seed the dedup set with every key already in the graph; the
        // same set then absorbs keys queued during this run
        let existing = store
            .list_relations(&RelationQuery::default())
            .map_err(|e| MatchError::Store(e.to_string()))?;
        let mut seen: HashSet<RelationKey> = existing.iter().map(|r| r.key()).collect();

        sink.report(MatchProgress::Started {
            matcher_id: matcher.id.to_string(),
            total_sources: sources.len(),
        });

        let mut queued: Vec<Relation> = Vec::new();
        let now = current_timestamp();

        for (i, source) in sources.iter().enumerate() {
            if sink.cancel_requested() {
                tracing::info!(matcher = matcher.id, "Match run cancelled, nothing committed");
                return Err(MatchError::Cancelled);
            }

            let source_embedding = source.embedding.as_deref().unwrap_or_default();

            for target in &targets {
                if matcher.source_type == matcher.target_type && source.id == target.id {
                    continue;
                }

                let target_embedding = target.embedding.as_deref().unwrap_or_default();
                let score = match_score(cosine_similarity(source_embedding, target_embedding));
                summary.pairs_scored += 1;

                if score < threshold {
                    summary.below_threshold += 1;
                    continue;
                }

                // Anchor resolution: a relation record must hang off a
                // challenge; pairings with no challenge side are not
                // representable by the current graph shape
                let (anchor_id, related_type, related_id) =
                    if matcher.source_type == EntityType::Challenge {
                        (&source.id, matcher.target_type, &target.id)
                    } else if matcher.target_type == EntityType::Challenge {
                        (&target.id, matcher.source_type, &source.id)
                    } else {
                        summary.skipped_unrepresentable += 1;
                        continue;
                    };

                let key = RelationKey {
                    anchor_entity_id: anchor_id.clone(),
                    related_entity_type: related_type,
                    related_entity_id: related_id.clone(),
                    relation_role: matcher.relation_role,
                };

                if seen.contains(&key) {
                    summary.skipped_duplicate += 1;
                    continue;
                }

                let strength = score.clamp(0, 100) as u8;
                let mut relation = Relation::new(
                    anchor_id.clone(),
                    related_type,
                    related_id.clone(),
                    matcher.relation_role,
                    strength,
                    matcher.relation_role.is_symmetric(),
                    CreatedVia::Ai,
                    now,
                );
                relation.notes = Some(format!("AI-generated match ({}% similarity)", strength));

                seen.insert(key);
                queued.push(relation);
            }

            summary.sources_processed = i + 1;
            sink.report(MatchProgress::SourceScanned {
                current: i + 1,
                total: sources.len(),
                queued: queued.len(),
            });

            if (i + 1) % self.settings.yield_every == 0 {
                tokio::task::yield_now().await;
            }
        }

        // Single end-of-run commit: either the whole candidate set
        // lands or, on store failure, none of it does
        summary.created = queued.len();
        if !queued.is_empty() {
            store
                .create_batch(queued.clone())
                .map_err(|e| MatchError::Store(e.to_string()))?;
        }

        tracing::info!(
            matcher = matcher.id,
            created = summary.created,
            scored = summary.pairs_scored,
            "Match run complete"
        );

        Ok(MatchOutcome {
            created: queued,
            summary,
        })
    }
}
