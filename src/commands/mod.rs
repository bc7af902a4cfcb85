pub mod greet;

use std::io::Write;

use tracing::debug;

use crate::cli::Args;
use crate::error::CommandResult;

/// Dispatches execution to the appropriate command handler and writes its
/// output as a single line.
pub fn execute<W: Write>(_args: &Args, out: &mut W) -> CommandResult<()> {
    let message = greet::message();
    debug!(%message, "writing greeting");
    writeln!(out, "{message}")?;
    out.flush()?;
    Ok(())
}
