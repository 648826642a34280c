//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use levelgate::config::ConfigFileError;
use levelgate::error::LogError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(std::io::Error),
    /// Configuration error
    Config(ConfigFileError),
    /// Invalid command-line value
    InvalidArgument(String),
    /// A façade call was rejected
    Log(LogError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::LoggingInit(_) => {
                eprintln!();
                eprintln!("Check that the log directory in config.ini is writable,");
                eprintln!("or point it elsewhere with: directory = <path>");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!(
                    "Config file: {}",
                    levelgate::config::config_file_path().display()
                );
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Log(e) => write!(f, "Log call rejected: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Log(e) => Some(e),
            CliError::InvalidArgument(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<LogError> for CliError {
    fn from(e: LogError) -> Self {
        CliError::Log(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_error_display() {
        let err = CliError::from(LogError::MissingArgument("message"));
        assert!(err.to_string().starts_with("Log call rejected: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_argument_has_no_source() {
        let err = CliError::InvalidArgument("--level loud".to_string());
        assert_eq!(err.to_string(), "Invalid argument: --level loud");
        assert!(std::error::Error::source(&err).is_none());
    }
}
