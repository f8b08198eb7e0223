//! For command implementation.

use crate::cli::ForArgs;
use crate::error::Result;
use crate::output::Formatter;
use civigraph_domain::traits::RelationStore;
use civigraph_store::SqliteStore;

/// Execute the for command: every relation visible on one entity.
///
/// A relation is visible on its anchor, and on the related side too
/// when the relation is bidirectional.
pub fn execute_for(args: ForArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let relations = store.relations_for(&args.entity_id)?;
    println!("{}", formatter.format_relations(&relations)?);

    Ok(())
}
