//! In-memory recording sink.

use std::fmt::Arguments;

use parking_lot::Mutex;

use crate::severity::Severity;
use crate::sink::LogSink;

/// One record captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    /// Sink operation that received the record.
    pub severity: Severity,
    /// Fully formatted record text.
    pub text: String,
}

/// Sink that keeps every record in memory.
///
/// Used as the recording double in tests and for embedding the façade where
/// records are inspected programmatically rather than printed.
///
/// # Example
///
/// ```
/// use levelgate::severity::Severity;
/// use levelgate::sink::{LogSink, MemorySink};
///
/// let sink = MemorySink::new();
/// sink.warn(format_args!("disk at {}%", 91));
/// assert_eq!(sink.texts(Severity::Warn), vec!["disk at 91%".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, severity: Severity, args: Arguments<'_>) {
        self.records.lock().push(CapturedRecord {
            severity,
            text: args.to_string(),
        });
    }

    /// All records in arrival order.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// Texts of records written at `severity`.
    pub fn texts(&self, severity: Severity) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.severity == severity)
            .map(|record| record.text.clone())
            .collect()
    }

    /// Number of records written at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|record| record.severity == severity)
            .count()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether no record has been written.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drop all records.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn error(&self, args: Arguments<'_>) {
        self.push(Severity::Error, args);
    }

    fn warn(&self, args: Arguments<'_>) {
        self.push(Severity::Warn, args);
    }

    fn info(&self, args: Arguments<'_>) {
        self.push(Severity::Info, args);
    }

    fn debug(&self, args: Arguments<'_>) {
        self.push(Severity::Debug, args);
    }

    fn trace(&self, args: Arguments<'_>) {
        self.push(Severity::Trace, args);
    }
}
