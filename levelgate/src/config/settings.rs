//! Settings structs for the configuration file.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::severity::{Severity, StackTraceVerbosity};

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Severity wrappers are built with
    pub level: Severity,
    /// How faults are rendered
    pub stack_traces: StackTraceVerbosity,
    /// Bound on remembered faults; `None` means unbounded
    pub dedup_capacity: Option<usize>,
    /// Directory holding the log file
    pub directory: PathBuf,
    /// Log file name inside `directory`
    pub file: String,
    /// Also log to stdout
    pub stdout: bool,
}
