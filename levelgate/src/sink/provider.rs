//! Resolving the sink bound to a calling context.

use std::sync::Arc;

use dashmap::DashMap;

use crate::sink::{LogSink, TracingSink};
use crate::strategy::Context;

/// Obtains (or creates) the sink for a context.
///
/// Consulted once per wrapper construction, never per log call.
pub trait SinkProvider: Send + Sync {
    /// Sink that records logged on behalf of `context` go to.
    fn sink_for(&self, context: &Context) -> Arc<dyn LogSink>;
}

/// Hands out one cached [`TracingSink`] per context.
///
/// Uses the `DashMap` entry API so concurrent first requests for the same
/// context end up sharing one sink.
#[derive(Debug, Default)]
pub struct TracingSinkProvider {
    sinks: DashMap<String, Arc<TracingSink>>,
}

impl TracingSinkProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contexts seen so far.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no context has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl SinkProvider for TracingSinkProvider {
    fn sink_for(&self, context: &Context) -> Arc<dyn LogSink> {
        let entry = self
            .sinks
            .entry(context.name().to_string())
            .or_insert_with(|| Arc::new(TracingSink::new(context.name())));
        Arc::clone(entry.value()) as Arc<dyn LogSink>
    }
}

/// Routes every context to the same sink.
#[derive(Clone)]
pub struct SharedSinkProvider {
    sink: Arc<dyn LogSink>,
}

impl SharedSinkProvider {
    /// Route every context to `sink`.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }
}

impl SinkProvider for SharedSinkProvider {
    fn sink_for(&self, _context: &Context) -> Arc<dyn LogSink> {
        Arc::clone(&self.sink)
    }
}
