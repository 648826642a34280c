//! Subscriber installation for the `tracing` backend.
//!
//! Records reaching [`TracingSink`](crate::sink::TracingSink) end up here:
//! - Written to `<directory>/<file>` (cleared on session start)
//! - Optionally mirrored to stdout
//! - Filtered by RUST_LOG when set, otherwise by the configured level

use std::fs;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::severity::Severity;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the global subscriber from `settings`.
///
/// Creates the log directory if needed and truncates the log file. Fault
/// renderings span several lines, so both layers use the compact single-line
/// event header and leave the message body untouched.
///
/// # Errors
///
/// Returns error if the log directory cannot be created, the log file cannot
/// be cleared, or a global subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(&settings.directory)?;

    let log_path = settings.directory.join(&settings.file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(&settings.directory, &settings.file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(false);

    let stdout_layer = settings.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter(settings.level))
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// RUST_LOG if set, otherwise a filter admitting `level` and above.
pub fn env_filter(level: Severity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(level)))
}

/// Directive string for `level`; `off` silences everything.
pub fn filter_directive(level: Severity) -> &'static str {
    level.as_str()
}
