//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use civigraph_domain::traits::RelationStore;
use civigraph_domain::RelationId;
use civigraph_store::SqliteStore;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let id = RelationId::from_string(&args.id).map_err(CliError::InvalidInput)?;

    match store.get_relation(id)? {
        Some(relation) => println!("{}", formatter.format_relation(&relation)?),
        None => println!("{}", formatter.warning(&format!("Relation not found: {}", id))),
    }

    Ok(())
}
