//! No-operation sink implementation.

use std::fmt::Arguments;

use crate::sink::LogSink;

/// A sink that discards all records.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where sink overhead should be eliminated
/// - Silent operation modes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl LogSink for NoOpSink {
    #[inline]
    fn error(&self, _args: Arguments<'_>) {}

    #[inline]
    fn warn(&self, _args: Arguments<'_>) {}

    #[inline]
    fn info(&self, _args: Arguments<'_>) {}

    #[inline]
    fn debug(&self, _args: Arguments<'_>) {}

    #[inline]
    fn trace(&self, _args: Arguments<'_>) {}
}
