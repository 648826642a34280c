//! Levelgate - level-gated logging with stack trace deduplication
//!
//! A logger is bound to one severity when it is built. The severity picks a
//! strategy once, so every later call goes straight to the matching sink
//! operation without re-checking levels. Faults can be rendered in full or,
//! for repeats of the same fault, as a short token.
//!
//! # High-Level API
//!
//! ```
//! use levelgate::fault::Fault;
//! use levelgate::service::{LoggingService, ScopedLogger};
//! use levelgate::severity::{Severity, StackTraceVerbosity};
//! use levelgate::strategy::LevelStrategyFactory;
//! use std::sync::Arc;
//!
//! struct Fetcher;
//!
//! let factory = LevelStrategyFactory::tracing();
//! let service = Arc::new(LoggingService::default());
//! let logger = ScopedLogger::new(
//!     service,
//!     factory.create_for::<Fetcher>(Severity::Warn),
//!     StackTraceVerbosity::UniqueOnly,
//! );
//!
//! logger.format_then_log("retrying in %ds", &[&5]).unwrap();
//! logger
//!     .log_throwable("fetch failed", &Fault::new("Timeout", "upstream slow"))
//!     .unwrap();
//! ```

pub mod config;
pub mod error;
pub mod fault;
pub mod format;
pub mod logging;
pub mod render;
pub mod service;
pub mod severity;
pub mod sink;
pub mod strategy;
pub mod validate;

/// Version of the levelgate library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
