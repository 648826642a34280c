//! Log sinks: where formatted records end up.
//!
//! The façade never writes anywhere itself. Every record is handed to a
//! [`LogSink`] operation chosen when the wrapper was built.
//!
//! # Implementations
//!
//! - `TracingSink`: production adapter that delegates to the `tracing` crate
//! - `NoOpSink`: silent sink for testing and benchmarking
//! - `MemorySink`: records kept in memory for inspection
//!
//! A [`SinkProvider`] decides which sink serves a given context.

mod memory;
mod noop;
mod provider;
mod tracing_adapter;
mod r#trait;

pub use memory::{CapturedRecord, MemorySink};
pub use noop::NoOpSink;
pub use provider::{SharedSinkProvider, SinkProvider, TracingSinkProvider};
pub use r#trait::LogSink;
pub use tracing_adapter::TracingSink;
