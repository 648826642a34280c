//! Severity-specialized logger handle.

use std::fmt::{self, Arguments};
use std::sync::Arc;

use super::context::Context;
use super::levels::LevelStrategy;
use crate::severity::Severity;
use crate::sink::LogSink;

/// One logger per (severity, context) pair.
///
/// Built by [`LevelStrategyFactory`](super::LevelStrategyFactory). The
/// strategy is chosen at construction, so emitting is a direct call into
/// one sink operation. Immutable and cheap to clone.
#[derive(Clone)]
pub struct LoggerWrapper {
    strategy: &'static dyn LevelStrategy,
    sink: Arc<dyn LogSink>,
    context: Context,
}

impl LoggerWrapper {
    pub(super) fn new(
        strategy: &'static dyn LevelStrategy,
        sink: Arc<dyn LogSink>,
        context: Context,
    ) -> Self {
        Self {
            strategy,
            sink,
            context,
        }
    }

    /// Severity fixed at construction.
    pub fn severity(&self) -> Severity {
        self.strategy.severity()
    }

    /// Context this wrapper logs for.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Write an already validated record.
    pub(crate) fn emit(&self, args: Arguments<'_>) {
        self.strategy.write(self.sink.as_ref(), args);
    }

    /// Write an already validated message followed by a lazily rendered
    /// fault.
    pub(crate) fn emit_with_fault(&self, message: &str, render: &mut dyn FnMut() -> String) {
        self.strategy
            .write_with_fault(self.sink.as_ref(), message, render);
    }
}

impl fmt::Debug for LoggerWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerWrapper")
            .field("severity", &self.severity())
            .field("context", &self.context.name())
            .finish()
    }
}
