//! Log sink trait definition.

use std::fmt::Arguments;

/// Line-oriented destination for log records.
///
/// One write operation per severity, so a level strategy can be hard-wired
/// to exactly one of them. There is no write for
/// [`Severity::Off`](crate::severity::Severity::Off).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use levelgate::sink::{LogSink, NoOpSink};
/// use std::sync::Arc;
///
/// let sink: Arc<dyn LogSink> = Arc::new(NoOpSink);
/// sink.info(format_args!("Application started"));
/// ```
pub trait LogSink: Send + Sync {
    /// Write an error-level record.
    fn error(&self, args: Arguments<'_>);

    /// Write a warning-level record.
    fn warn(&self, args: Arguments<'_>);

    /// Write an info-level record.
    fn info(&self, args: Arguments<'_>);

    /// Write a debug-level record.
    fn debug(&self, args: Arguments<'_>);

    /// Write a trace-level record.
    fn trace(&self, args: Arguments<'_>);
}
