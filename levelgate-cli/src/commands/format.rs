//! Format a printf-style template and log the result.

use std::fmt::Display;

use crate::error::CliError;
use crate::runner::CliRunner;

use super::CLI_CONTEXT;

/// Run the format command.
pub fn run(runner: &CliRunner, template: &str, args: &[String]) -> Result<(), CliError> {
    runner.log_startup("format");

    let args: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();
    runner.logger(CLI_CONTEXT)?.format_then_log(template, &args)?;
    Ok(())
}
