//! The six level strategies.
//!
//! Each strategy is a zero-sized type hard-wired to one sink operation, so a
//! wrapper holding one never has to look at its severity again.

use std::fmt::{self, Arguments};

use crate::severity::Severity;
use crate::sink::LogSink;

/// Writes a record through one fixed sink operation.
pub trait LevelStrategy: Send + Sync + fmt::Debug {
    /// Severity this strategy was built for.
    fn severity(&self) -> Severity;

    /// Write a plain record.
    fn write(&self, sink: &dyn LogSink, args: Arguments<'_>);

    /// Write `message` followed by a rendered fault.
    ///
    /// `render` is invoked at most once, and only by strategies that emit.
    fn write_with_fault(
        &self,
        sink: &dyn LogSink,
        message: &str,
        render: &mut dyn FnMut() -> String,
    ) {
        let rendered = render();
        self.write(sink, format_args!("{} {}", message, rendered));
    }
}

/// Discards everything. Faults are never rendered, so OFF wrappers do not
/// consume dedup tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffLevel;

/// Bound to [`LogSink::error`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorLevel;

/// Bound to [`LogSink::warn`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WarnLevel;

/// Bound to [`LogSink::info`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoLevel;

/// Bound to [`LogSink::debug`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugLevel;

/// Bound to [`LogSink::trace`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceLevel;

impl LevelStrategy for OffLevel {
    fn severity(&self) -> Severity {
        Severity::Off
    }

    #[inline]
    fn write(&self, _sink: &dyn LogSink, _args: Arguments<'_>) {}

    #[inline]
    fn write_with_fault(
        &self,
        _sink: &dyn LogSink,
        _message: &str,
        _render: &mut dyn FnMut() -> String,
    ) {
    }
}

impl LevelStrategy for ErrorLevel {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    #[inline]
    fn write(&self, sink: &dyn LogSink, args: Arguments<'_>) {
        sink.error(args);
    }
}

impl LevelStrategy for WarnLevel {
    fn severity(&self) -> Severity {
        Severity::Warn
    }

    #[inline]
    fn write(&self, sink: &dyn LogSink, args: Arguments<'_>) {
        sink.warn(args);
    }
}

impl LevelStrategy for InfoLevel {
    fn severity(&self) -> Severity {
        Severity::Info
    }

    #[inline]
    fn write(&self, sink: &dyn LogSink, args: Arguments<'_>) {
        sink.info(args);
    }
}

impl LevelStrategy for DebugLevel {
    fn severity(&self) -> Severity {
        Severity::Debug
    }

    #[inline]
    fn write(&self, sink: &dyn LogSink, args: Arguments<'_>) {
        sink.debug(args);
    }
}

impl LevelStrategy for TraceLevel {
    fn severity(&self) -> Severity {
        Severity::Trace
    }

    #[inline]
    fn write(&self, sink: &dyn LogSink, args: Arguments<'_>) {
        sink.trace(args);
    }
}

static OFF: OffLevel = OffLevel;
static ERROR: ErrorLevel = ErrorLevel;
static WARN: WarnLevel = WarnLevel;
static INFO: InfoLevel = InfoLevel;
static DEBUG: DebugLevel = DebugLevel;
static TRACE: TraceLevel = TraceLevel;

/// The strategy for `severity`.
///
/// The match is exhaustive with no fallback arm: adding a severity without
/// a strategy is a compile error.
pub fn strategy_for(severity: Severity) -> &'static dyn LevelStrategy {
    match severity {
        Severity::Off => &OFF,
        Severity::Error => &ERROR,
        Severity::Warn => &WARN,
        Severity::Info => &INFO,
        Severity::Debug => &DEBUG,
        Severity::Trace => &TRACE,
    }
}
