//! Matchers command implementation.

use crate::error::Result;
use crate::output::Formatter;
use civigraph_matcher::builtin_matchers;

/// Execute the matchers command.
pub fn execute_matchers(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_matchers(builtin_matchers())?);
    Ok(())
}
