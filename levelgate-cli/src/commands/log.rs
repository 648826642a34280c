//! Log a single message.

use crate::error::CliError;
use crate::runner::CliRunner;

use super::CLI_CONTEXT;

/// Run the log command.
pub fn run(runner: &CliRunner, message: &str) -> Result<(), CliError> {
    runner.log_startup("log");
    runner.logger(CLI_CONTEXT)?.log(message)?;
    Ok(())
}
