//! Review command implementation.

use crate::cli::ReviewArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use civigraph_domain::RelationId;
use civigraph_review::{ReviewOutcome, Reviewer};
use civigraph_store::SqliteStore;

/// Execute the review command.
pub fn execute_review(
    args: ReviewArgs,
    store: &mut SqliteStore,
    reviewer: &Reviewer,
    formatter: &Formatter,
) -> Result<()> {
    let id = RelationId::from_string(&args.id).map_err(CliError::InvalidInput)?;

    let outcome = reviewer.review(store, id, args.decision.into(), args.by.as_deref())?;

    match outcome {
        ReviewOutcome::Applied(relation) => {
            println!(
                "{}",
                formatter.success(&format!("Relation {} {}", id, relation.status))
            );
            println!("{}", formatter.format_relation(&relation)?);
        }
        ReviewOutcome::Ignored { status, .. } => {
            println!(
                "{}",
                formatter.info(&format!(
                    "Relation {} already reviewed ({}), nothing changed",
                    id, status
                ))
            );
        }
    }

    Ok(())
}
