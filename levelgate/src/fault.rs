//! Captured error reports.
//!
//! Rust errors carry no type name once erased to `dyn Error` and usually no
//! stack trace either. A [`Fault`] records both, together with the message
//! and the `source()` chain. Faults compare structurally through
//! [`FaultFingerprint`].
//!
//! Where the frames come from decides what counts as "the same fault":
//!
//! - [`Fault::from_backtrace`] uses a backtrace the error captured when it was
//!   constructed, so every handler that logs that error (or a clone of it)
//!   produces one fingerprint, and errors built at different sites stay apart.
//! - [`Fault::capture`] snapshots the stack where it is called. Errors handled
//!   at one site share frames no matter where they were created, and one
//!   error logged by two handlers gets two fingerprints.

use std::any::type_name;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

/// A captured error: type, message, causes and stack frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    type_name: String,
    message: String,
    causes: Vec<String>,
    frames: Vec<String>,
}

/// Structural identity of a fault, used as the dedup key.
///
/// Two faults with the same type name, message and frame sequence share a
/// fingerprint even when they were captured separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaultFingerprint {
    type_name: String,
    message: String,
    frames: Vec<String>,
}

impl Fault {
    /// Build a fault with no frames and no causes.
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            causes: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Capture `error` together with the stack at the handling site.
    ///
    /// The frames describe where this call happens, not where `error` was
    /// created. Prefer [`from_backtrace`](Self::from_backtrace) when the error
    /// carries its own backtrace.
    ///
    /// The backtrace is taken unconditionally, regardless of
    /// `RUST_BACKTRACE`. Frames are empty on platforms where capture is
    /// unsupported.
    pub fn capture<E: Error + 'static>(error: &E) -> Self {
        Self::from_backtrace(error, &Backtrace::force_capture())
    }

    /// Build a fault from `error` and a backtrace captured earlier,
    /// typically in the error's constructor.
    ///
    /// Frames belonging to the capture machinery are dropped, so the list
    /// starts at the code that asked for the backtrace.
    ///
    /// ```
    /// use levelgate::fault::Fault;
    /// use std::backtrace::Backtrace;
    /// use std::fmt;
    ///
    /// #[derive(Debug)]
    /// struct StoreError {
    ///     backtrace: Backtrace,
    /// }
    ///
    /// impl fmt::Display for StoreError {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("record missing")
    ///     }
    /// }
    ///
    /// impl std::error::Error for StoreError {}
    ///
    /// let err = StoreError { backtrace: Backtrace::force_capture() };
    /// let fault = Fault::from_backtrace(&err, &err.backtrace);
    /// assert_eq!(fault.message(), "record missing");
    /// ```
    pub fn from_backtrace<E: Error + 'static>(error: &E, backtrace: &Backtrace) -> Self {
        Self::from_parts(type_name::<E>(), error, backtrace)
    }

    /// Capture a type-erased error. The type name is unknown, so the
    /// caller supplies one.
    pub fn capture_dyn(type_name: impl Into<String>, error: &(dyn Error + 'static)) -> Self {
        Self::from_parts(type_name, error, &Backtrace::force_capture())
    }

    fn from_parts(
        type_name: impl Into<String>,
        error: &(dyn Error + 'static),
        backtrace: &Backtrace,
    ) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Self {
            type_name: type_name.into(),
            message: error.to_string(),
            causes,
            frames: parse_frames(backtrace),
        }
    }

    /// Replace the frame list.
    pub fn with_frames<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frames = frames.into_iter().map(Into::into).collect();
        self
    }

    /// Append a cause message.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Full type path of the originating error.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Display message of the originating error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of the `source()` chain, outermost first.
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    /// Stack frames, innermost first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Dedup key for this fault.
    pub fn fingerprint(&self) -> FaultFingerprint {
        FaultFingerprint {
            type_name: self.type_name.clone(),
            message: self.message.clone(),
            frames: self.frames.clone(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message)
    }
}

/// Split std's backtrace rendering into one string per frame.
///
/// The std format is a numbered symbol line optionally followed by an
/// indented `at file:line:col` line; the two are joined into one frame.
fn parse_frames(backtrace: &Backtrace) -> Vec<String> {
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }

    let rendered = backtrace.to_string();
    let mut frames: Vec<String> = Vec::new();
    for line in rendered.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(last) = frames.last_mut() {
                last.push_str(" (");
                last.push_str(location);
                last.push(')');
            }
            continue;
        }
        let symbol = match line.split_once(": ") {
            Some((index, symbol)) if index.chars().all(|c| c.is_ascii_digit()) => symbol,
            _ => line,
        };
        frames.push(symbol.to_string());
    }

    // Drop the capture machinery itself so frames start at the caller.
    let skip = frames
        .iter()
        .rposition(|frame| is_capture_frame(frame))
        .map(|pos| pos + 1)
        .unwrap_or(0);
    frames.drain(..skip);
    frames
}

fn is_capture_frame(frame: &str) -> bool {
    frame.starts_with("std::backtrace")
        || frame.contains("Backtrace::")
        || frame.contains("Fault::capture")
        || frame.contains("Fault::from_backtrace")
}
