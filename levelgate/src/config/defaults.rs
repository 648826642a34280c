//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::settings::*;
use crate::severity::{Severity, StackTraceVerbosity};

/// Default severity for wrappers.
pub const DEFAULT_LEVEL: Severity = Severity::Info;

/// Default fault rendering.
pub const DEFAULT_STACK_TRACES: StackTraceVerbosity = StackTraceVerbosity::UniqueOnly;

/// Default log directory, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "levelgate.log";

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            stack_traces: DEFAULT_STACK_TRACES,
            dedup_capacity: None,
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file: DEFAULT_LOG_FILE.to_string(),
            stdout: true,
        }
    }
}
