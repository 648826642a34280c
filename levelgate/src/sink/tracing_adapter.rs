//! Tracing library adapter implementation.

use std::fmt::Arguments;

use crate::sink::LogSink;

/// Sink that forwards records to the `tracing` crate.
///
/// Each record carries the owning context as a `context` field, so
/// subscribers can filter or group by logger even though `tracing` targets
/// must be known at compile time.
///
/// # Example
///
/// ```ignore
/// use levelgate::sink::{LogSink, TracingSink};
///
/// // Assumes a tracing subscriber is already initialized
/// let sink = TracingSink::new("app::Fetcher");
/// sink.info(format_args!("Using tracing backend"));
/// ```
#[derive(Debug, Clone)]
pub struct TracingSink {
    context: String,
}

impl TracingSink {
    /// Create a sink bound to `context`.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// The context this sink tags records with.
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl LogSink for TracingSink {
    fn error(&self, args: Arguments<'_>) {
        tracing::error!(context = %self.context, "{}", args);
    }

    fn warn(&self, args: Arguments<'_>) {
        tracing::warn!(context = %self.context, "{}", args);
    }

    fn info(&self, args: Arguments<'_>) {
        tracing::info!(context = %self.context, "{}", args);
    }

    fn debug(&self, args: Arguments<'_>) {
        tracing::debug!(context = %self.context, "{}", args);
    }

    fn trace(&self, args: Arguments<'_>) {
        tracing::trace!(context = %self.context, "{}", args);
    }
}
