//! The logging façade.
//!
//! [`LoggingService`] validates, formats and renders, then hands the record
//! to the wrapper's pre-selected sink operation. Validation always finishes
//! before any fault is rendered or anything is written, so a rejected call
//! leaves no trace in the sink.
//!
//! # Example
//!
//! ```
//! use levelgate::fault::Fault;
//! use levelgate::service::LoggingService;
//! use levelgate::severity::{Severity, StackTraceVerbosity};
//! use levelgate::sink::{MemorySink, SharedSinkProvider};
//! use levelgate::strategy::LevelStrategyFactory;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let factory = LevelStrategyFactory::new(Arc::new(SharedSinkProvider::new(sink.clone())));
//! let service = LoggingService::default();
//!
//! let info = factory.create(Severity::Info, "app::Fetcher").unwrap();
//! service.format_then_log(&info, "[%s]", &[&"INFO"]).unwrap();
//! assert_eq!(sink.texts(Severity::Info), vec!["[INFO]".to_string()]);
//!
//! let fault = Fault::new("Timeout", "upstream slow");
//! service
//!     .log_throwable(&info, StackTraceVerbosity::Full, "fetch failed", &fault)
//!     .unwrap();
//! ```

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::LoggingSettings;
use crate::error::LogError;
use crate::fault::Fault;
use crate::format::{MessageFormatter, PrintfFormatter};
use crate::render::ThrowableRenderer;
use crate::severity::StackTraceVerbosity;
use crate::strategy::LoggerWrapper;
use crate::validate::{require_non_blank, require_present};

/// Snapshot of service counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStats {
    /// Calls that passed validation and were dispatched.
    pub accepted: u64,
    /// Accepted calls that carried a fault.
    pub with_fault: u64,
    /// Calls rejected before dispatch.
    pub rejected: u64,
}

#[derive(Debug, Default)]
struct ServiceCounters {
    accepted: AtomicU64,
    with_fault: AtomicU64,
    rejected: AtomicU64,
}

/// Validating, formatting front end over [`LoggerWrapper`]s.
///
/// Collaborators are injected; nothing here is process-global. Share one
/// service across threads with `Arc`.
pub struct LoggingService {
    formatter: Arc<dyn MessageFormatter>,
    renderer: Arc<ThrowableRenderer>,
    counters: ServiceCounters,
}

impl LoggingService {
    /// Create a service from its two collaborators.
    pub fn new(formatter: Arc<dyn MessageFormatter>, renderer: Arc<ThrowableRenderer>) -> Self {
        Self {
            formatter,
            renderer,
            counters: ServiceCounters::default(),
        }
    }

    /// Printf formatter and a renderer bounded by `settings.dedup_capacity`.
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let renderer = match settings.dedup_capacity {
            Some(capacity) => ThrowableRenderer::with_capacity(capacity),
            None => ThrowableRenderer::new(),
        };
        Self::new(Arc::new(PrintfFormatter::new()), Arc::new(renderer))
    }

    /// The renderer faults go through.
    pub fn renderer(&self) -> &Arc<ThrowableRenderer> {
        &self.renderer
    }

    /// Write `message` verbatim.
    ///
    /// # Errors
    ///
    /// [`LogError::MissingArgument`] for `None`, [`LogError::InvalidArgument`]
    /// for a blank message.
    pub fn log<'m>(
        &self,
        wrapper: &LoggerWrapper,
        message: impl Into<Option<&'m str>>,
    ) -> Result<(), LogError> {
        let message = self.checked(require_non_blank(message.into(), "message"))?;
        wrapper.emit(format_args!("{}", message));
        self.accept(false);
        Ok(())
    }

    /// Format `template` with `args`, then write it like [`log`](Self::log).
    ///
    /// Validation applies to the formatted output, not to the template.
    pub fn format_then_log<'t>(
        &self,
        wrapper: &LoggerWrapper,
        template: impl Into<Option<&'t str>>,
        args: &[&dyn Display],
    ) -> Result<(), LogError> {
        let formatted = self.checked(self.format(template.into(), args))?;
        let message = self.checked(require_non_blank(Some(formatted.as_str()), "message"))?;
        wrapper.emit(format_args!("{}", message));
        self.accept(false);
        Ok(())
    }

    /// Write `message` followed by the rendered `fault` as one record.
    pub fn log_throwable<'m, 'f>(
        &self,
        wrapper: &LoggerWrapper,
        verbosity: StackTraceVerbosity,
        message: impl Into<Option<&'m str>>,
        fault: impl Into<Option<&'f Fault>>,
    ) -> Result<(), LogError> {
        let message = self.checked(require_non_blank(message.into(), "message"))?;
        let fault = self.checked(require_present(fault.into(), "fault"))?;
        self.emit_with_fault(wrapper, verbosity, message, fault);
        Ok(())
    }

    /// Format, validate, then write together with the rendered `fault`.
    pub fn format_then_log_throwable<'t, 'f>(
        &self,
        wrapper: &LoggerWrapper,
        verbosity: StackTraceVerbosity,
        fault: impl Into<Option<&'f Fault>>,
        template: impl Into<Option<&'t str>>,
        args: &[&dyn Display],
    ) -> Result<(), LogError> {
        let formatted = self.checked(self.format(template.into(), args))?;
        let message = self.checked(require_non_blank(Some(formatted.as_str()), "message"))?;
        let fault = self.checked(require_present(fault.into(), "fault"))?;
        self.emit_with_fault(wrapper, verbosity, message, fault);
        Ok(())
    }

    /// Snapshot of the service counters.
    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            accepted: self.counters.accepted.load(Ordering::Relaxed),
            with_fault: self.counters.with_fault.load(Ordering::Relaxed),
            rejected: self.counters.rejected.load(Ordering::Relaxed),
        }
    }

    fn format(&self, template: Option<&str>, args: &[&dyn Display]) -> Result<String, LogError> {
        let template = template.ok_or(LogError::MissingArgument("template"))?;
        Ok(self.formatter.format(template, args)?)
    }

    fn emit_with_fault(
        &self,
        wrapper: &LoggerWrapper,
        verbosity: StackTraceVerbosity,
        message: &str,
        fault: &Fault,
    ) {
        let context = wrapper.context();
        wrapper.emit_with_fault(message, &mut || {
            self.renderer.render(fault, verbosity, context)
        });
        self.accept(true);
    }

    fn checked<T>(&self, result: Result<T, LogError>) -> Result<T, LogError> {
        if result.is_err() {
            self.counters.rejected.fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    fn accept(&self, with_fault: bool) {
        self.counters.accepted.fetch_add(1, Ordering::Relaxed);
        if with_fault {
            self.counters.with_fault.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Default for LoggingService {
    /// Printf formatter and a fresh unbounded renderer.
    fn default() -> Self {
        Self::new(
            Arc::new(PrintfFormatter::new()),
            Arc::new(ThrowableRenderer::new()),
        )
    }
}

/// A wrapper paired with its service and a default verbosity.
///
/// Exposes the four façade operations as methods so call sites read like a
/// conventional logger.
#[derive(Clone)]
pub struct ScopedLogger {
    service: Arc<LoggingService>,
    wrapper: LoggerWrapper,
    verbosity: StackTraceVerbosity,
}

impl ScopedLogger {
    /// Pair `wrapper` with `service`.
    pub fn new(
        service: Arc<LoggingService>,
        wrapper: LoggerWrapper,
        verbosity: StackTraceVerbosity,
    ) -> Self {
        Self {
            service,
            wrapper,
            verbosity,
        }
    }

    /// The underlying wrapper.
    pub fn wrapper(&self) -> &LoggerWrapper {
        &self.wrapper
    }

    /// See [`LoggingService::log`].
    pub fn log<'m>(&self, message: impl Into<Option<&'m str>>) -> Result<(), LogError> {
        self.service.log(&self.wrapper, message)
    }

    /// See [`LoggingService::format_then_log`].
    pub fn format_then_log<'t>(
        &self,
        template: impl Into<Option<&'t str>>,
        args: &[&dyn Display],
    ) -> Result<(), LogError> {
        self.service.format_then_log(&self.wrapper, template, args)
    }

    /// See [`LoggingService::log_throwable`].
    pub fn log_throwable<'m, 'f>(
        &self,
        message: impl Into<Option<&'m str>>,
        fault: impl Into<Option<&'f Fault>>,
    ) -> Result<(), LogError> {
        self.service
            .log_throwable(&self.wrapper, self.verbosity, message, fault)
    }

    /// See [`LoggingService::format_then_log_throwable`].
    pub fn format_then_log_throwable<'t, 'f>(
        &self,
        fault: impl Into<Option<&'f Fault>>,
        template: impl Into<Option<&'t str>>,
        args: &[&dyn Display],
    ) -> Result<(), LogError> {
        self.service.format_then_log_throwable(
            &self.wrapper,
            self.verbosity,
            fault,
            template,
            args,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatError;
    use crate::severity::Severity;
    use crate::sink::{MemorySink, SharedSinkProvider};
    use crate::strategy::LevelStrategyFactory;

    struct Checkout;

    fn setup(severity: Severity) -> (LoggingService, LoggerWrapper, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let factory = LevelStrategyFactory::new(Arc::new(SharedSinkProvider::new(sink.clone())));
        let wrapper = factory.create_for::<Checkout>(severity);
        (LoggingService::default(), wrapper, sink)
    }

    fn fault() -> Fault {
        Fault::new("PaymentError", "card declined").with_frames(["shop::Checkout::pay"])
    }

    #[test]
    fn test_log_writes_verbatim() {
        let (service, wrapper, sink) = setup(Severity::Info);
        service.log(&wrapper, "  order 17 placed ").unwrap();
        assert_eq!(sink.texts(Severity::Info), vec!["  order 17 placed ".to_string()]);
    }

    #[test]
    fn test_format_then_log_example() {
        let (service, wrapper, sink) = setup(Severity::Info);
        service.format_then_log(&wrapper, "[%s]", &[&"INFO"]).unwrap();
        assert_eq!(sink.texts(Severity::Info), vec!["[INFO]".to_string()]);
    }

    #[test]
    fn test_formatted_blank_is_invalid() {
        let (service, wrapper, sink) = setup(Severity::Info);
        let err = service.format_then_log(&wrapper, "%s", &[&"   "]).unwrap_err();
        assert!(err.is_invalid());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_none_template_is_missing() {
        let (service, wrapper, sink) = setup(Severity::Info);
        let err = service.format_then_log(&wrapper, None, &[]).unwrap_err();
        assert_eq!(err, LogError::MissingArgument("template"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_format_failure_propagates_as_is() {
        let (service, wrapper, sink) = setup(Severity::Info);
        let err = service.format_then_log(&wrapper, "%s %s", &[&1]).unwrap_err();
        assert_eq!(
            err,
            LogError::Format(FormatError::MissingArgument {
                index: 2,
                supplied: 1
            })
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_log_throwable_record_shape() {
        let (service, wrapper, sink) = setup(Severity::Error);
        service
            .log_throwable(&wrapper, StackTraceVerbosity::Full, "payment failed", &fault())
            .unwrap();
        assert_eq!(
            sink.texts(Severity::Error),
            vec![
                "payment failed [Checkout] PaymentError: card declined\n    at shop::Checkout::pay"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_missing_fault_is_rejected_without_rendering() {
        let (service, wrapper, sink) = setup(Severity::Error);
        let err = service
            .log_throwable(&wrapper, StackTraceVerbosity::UniqueOnly, "x", None)
            .unwrap_err();
        assert_eq!(err, LogError::MissingArgument("fault"));
        assert!(sink.is_empty());
        assert_eq!(service.renderer().stats().tokens_minted, 0);
    }

    #[test]
    fn test_invalid_message_checked_before_fault() {
        let (service, wrapper, _) = setup(Severity::Error);
        let err = service
            .log_throwable(&wrapper, StackTraceVerbosity::Full, "", None)
            .unwrap_err();
        assert!(err.is_invalid());
    }

    #[test]
    fn test_format_then_log_throwable() {
        let (service, wrapper, sink) = setup(Severity::Warn);
        service
            .format_then_log_throwable(
                &wrapper,
                StackTraceVerbosity::Full,
                &fault(),
                "attempt %d of %d",
                &[&2, &3],
            )
            .unwrap();
        let texts = sink.texts(Severity::Warn);
        assert_eq!(texts.len(), 1);
        assert!(texts[0].starts_with("attempt 2 of 3 [Checkout] PaymentError"));
    }

    #[test]
    fn test_off_validates_but_never_renders() {
        let (service, wrapper, sink) = setup(Severity::Off);
        assert!(service.log(&wrapper, "   ").is_err());
        service
            .log_throwable(&wrapper, StackTraceVerbosity::UniqueOnly, "quiet", &fault())
            .unwrap();
        assert!(sink.is_empty());
        assert_eq!(service.renderer().stats().tokens_minted, 0);
    }

    #[test]
    fn test_stats() {
        let (service, wrapper, _) = setup(Severity::Debug);
        service.log(&wrapper, "a").unwrap();
        service
            .log_throwable(&wrapper, StackTraceVerbosity::Full, "b", &fault())
            .unwrap();
        let _ = service.log(&wrapper, None);
        assert_eq!(
            service.stats(),
            ServiceStats {
                accepted: 2,
                with_fault: 1,
                rejected: 1,
            }
        );
    }

    #[test]
    fn test_scoped_logger_delegates() {
        let (service, wrapper, sink) = setup(Severity::Info);
        let logger = ScopedLogger::new(
            Arc::new(service),
            wrapper,
            StackTraceVerbosity::UniqueOnly,
        );

        logger.log("plain").unwrap();
        logger.format_then_log("n=%d", &[&5]).unwrap();
        logger.log_throwable("first", &fault()).unwrap();
        logger
            .format_then_log_throwable(&fault(), "again %s", &[&"later"])
            .unwrap();

        let texts = sink.texts(Severity::Info);
        assert_eq!(texts.len(), 4);
        assert!(texts[2].contains("at shop::Checkout::pay"));
        assert!(texts[3].contains("repeated]"));
        assert!(!texts[3].contains("at shop::Checkout::pay"));
    }

    #[test]
    fn test_from_settings_bounds_renderer() {
        let mut settings = LoggingSettings::default();
        assert_eq!(LoggingService::from_settings(&settings).renderer().capacity(), None);

        settings.dedup_capacity = Some(8);
        let service = LoggingService::from_settings(&settings);
        assert_eq!(service.renderer().capacity(), Some(8));
    }
}
