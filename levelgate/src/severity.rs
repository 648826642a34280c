//! Severity and stack trace verbosity enumerations.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Log severity, ordered by verbosity.
///
/// `Off` sorts lowest and never emits. Every other variant corresponds to
/// exactly one write operation on a [`LogSink`](crate::sink::LogSink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Never emit
    Off,
    /// Error messages
    Error,
    /// Warning messages
    Warn,
    /// General information
    Info,
    /// Debugging information
    Debug,
    /// Verbose debugging information
    Trace,
}

impl Severity {
    /// All severities, least verbose first.
    pub const ALL: [Severity; 6] = [
        Severity::Off,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Lowercase name as used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Trace => "trace",
        }
    }

    /// The matching `tracing` level, or `None` for `Off`.
    pub fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            Severity::Off => None,
            Severity::Error => Some(tracing::Level::ERROR),
            Severity::Warn => Some(tracing::Level::WARN),
            Severity::Info => Some(tracing::Level::INFO),
            Severity::Debug => Some(tracing::Level::DEBUG),
            Severity::Trace => Some(tracing::Level::TRACE),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a severity or verbosity name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {kind} '{input}' - expected one of: {expected}")]
pub struct ParseLevelError {
    kind: &'static str,
    input: String,
    expected: &'static str,
}

impl FromStr for Severity {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(Severity::Off),
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            _ => Err(ParseLevelError {
                kind: "severity",
                input: s.to_string(),
                expected: "off, error, warn, info, debug, trace",
            }),
        }
    }
}

/// How much of a fault the renderer writes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StackTraceVerbosity {
    /// Type, message, causes and every frame, every time.
    Full,
    /// Full output the first time a fault is seen, then only its token.
    #[default]
    UniqueOnly,
}

impl StackTraceVerbosity {
    /// Name as used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            StackTraceVerbosity::Full => "full",
            StackTraceVerbosity::UniqueOnly => "unique-only",
        }
    }
}

impl fmt::Display for StackTraceVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StackTraceVerbosity {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(StackTraceVerbosity::Full),
            "unique-only" | "unique_only" | "unique" => Ok(StackTraceVerbosity::UniqueOnly),
            _ => Err(ParseLevelError {
                kind: "stack trace verbosity",
                input: s.to_string(),
                expected: "full, unique-only",
            }),
        }
    }
}
