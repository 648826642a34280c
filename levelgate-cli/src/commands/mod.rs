//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Print or save the effective configuration
//! - [`format`] - Format a template, then log it
//! - [`log`] - Log a message verbatim
//! - [`retry`] - Retry a failing operation, logging each fault

pub mod config;
pub mod format;
pub mod log;
pub mod retry;

/// Context name records from the CLI are logged under.
pub const CLI_CONTEXT: &str = "levelgate::cli";
