//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use civigraph_domain::traits::{RelationQuery, RelationStore};
use civigraph_store::SqliteStore;

/// Execute the list command.
pub fn execute_list(args: ListArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let query = RelationQuery {
        related_entity_type: args.entity_type.map(Into::into),
        status: args.status.map(Into::into),
        created_via: args.via.map(Into::into),
        anchor_entity_id: args.anchor,
        text: args.text,
        limit: args.limit,
    };

    let relations = store.list_relations(&query)?;
    println!("{}", formatter.format_relations(&relations)?);

    Ok(())
}
