//! Building wrappers for a severity and a context.

use std::sync::Arc;

use tracing::trace;

use super::context::Context;
use super::levels::strategy_for;
use super::wrapper::LoggerWrapper;
use crate::error::LogError;
use crate::severity::Severity;
use crate::sink::{SinkProvider, TracingSinkProvider};

/// Resolves a severity and a context to a [`LoggerWrapper`].
///
/// The level branch happens here, once per wrapper, instead of on every log
/// call.
///
/// # Example
///
/// ```
/// use levelgate::severity::Severity;
/// use levelgate::sink::{MemorySink, SharedSinkProvider};
/// use levelgate::strategy::LevelStrategyFactory;
/// use std::sync::Arc;
///
/// struct Fetcher;
///
/// let sink = Arc::new(MemorySink::new());
/// let factory = LevelStrategyFactory::new(Arc::new(SharedSinkProvider::new(sink)));
/// let wrapper = factory.create_for::<Fetcher>(Severity::Warn);
/// assert_eq!(wrapper.severity(), Severity::Warn);
/// assert_eq!(wrapper.context().simple_name(), "Fetcher");
/// ```
#[derive(Clone)]
pub struct LevelStrategyFactory {
    provider: Arc<dyn SinkProvider>,
}

impl LevelStrategyFactory {
    /// Create a factory that binds wrappers to sinks from `provider`.
    pub fn new(provider: Arc<dyn SinkProvider>) -> Self {
        Self { provider }
    }

    /// Factory whose wrappers write to `tracing`.
    pub fn tracing() -> Self {
        Self::new(Arc::new(TracingSinkProvider::new()))
    }

    /// Wrapper for `severity` logging on behalf of the context named
    /// `context`.
    ///
    /// Fails with [`LogError::MissingArgument`] when `context` is blank.
    pub fn create(&self, severity: Severity, context: &str) -> Result<LoggerWrapper, LogError> {
        let context = Context::named(context)?;
        Ok(self.create_in(severity, context))
    }

    /// Wrapper for `severity` logging on behalf of type `T`.
    ///
    /// Infallible: a type always has a name.
    pub fn create_for<T: ?Sized>(&self, severity: Severity) -> LoggerWrapper {
        self.create_in(severity, Context::of::<T>())
    }

    /// Wrapper for an already-built context.
    pub fn create_in(&self, severity: Severity, context: Context) -> LoggerWrapper {
        let sink = self.provider.sink_for(&context);
        trace!(severity = %severity, context = %context, "Created logger wrapper");
        LoggerWrapper::new(strategy_for(severity), sink, context)
    }
}

impl Default for LevelStrategyFactory {
    fn default() -> Self {
        Self::tracing()
    }
}
