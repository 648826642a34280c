//! Retry a failing operation to show stack trace deduplication.
//!
//! Every attempt fails the same way at the same call site, so the first
//! record carries the full trace and a token and later ones only the token.

use std::fmt;

use levelgate::fault::Fault;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

use super::CLI_CONTEXT;

/// Error returned by the simulated operation.
#[derive(Debug)]
pub struct UnreachableUpstream {
    source: std::io::Error,
}

impl fmt::Display for UnreachableUpstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upstream did not answer")
    }
}

impl std::error::Error for UnreachableUpstream {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The operation being retried. It never succeeds.
fn call_upstream() -> Result<(), UnreachableUpstream> {
    Err(UnreachableUpstream {
        source: std::io::Error::new(std::io::ErrorKind::TimedOut, "connect timed out"),
    })
}

/// Run the retry command.
pub fn run(runner: &CliRunner, attempts: u32) -> Result<(), CliError> {
    if attempts == 0 {
        return Err(CliError::InvalidArgument(
            "retry needs at least one attempt".to_string(),
        ));
    }
    runner.log_startup("retry");

    let logger = runner.logger(CLI_CONTEXT)?;
    for attempt in 1..=attempts {
        if let Err(e) = call_upstream() {
            let fault = Fault::capture(&e);
            logger.format_then_log_throwable(
                &fault,
                "attempt %d of %d failed",
                &[&attempt, &attempts],
            )?;
        }
    }

    let stats = runner.service().renderer().stats();
    info!(
        tokens_minted = stats.tokens_minted,
        repeats_suppressed = stats.repeats_suppressed,
        "Retry finished"
    );
    Ok(())
}
