//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use civigraph_domain::traits::RelationStore;
use civigraph_domain::RelationId;
use civigraph_store::SqliteStore;
use std::io::{self, BufRead, Write};

/// Execute the delete command.
pub fn execute_delete(
    args: DeleteArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let id = RelationId::from_string(&args.id).map_err(CliError::InvalidInput)?;

    if !args.yes {
        print!("Delete relation {}? [y/N] ", id);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("{}", formatter.info("Aborted"));
            return Ok(());
        }
    }

    store.delete_relation(id)?;
    println!("{}", formatter.relation_deleted(&id));

    Ok(())
}
