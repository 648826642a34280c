//! Level-gated dispatch.
//!
//! A [`LevelStrategyFactory`] turns a [`Severity`](crate::severity::Severity)
//! and a [`Context`] into a [`LoggerWrapper`] holding one of six
//! [`LevelStrategy`] singletons. The severity is looked at exactly once, at
//! construction:
//!
//! ```text
//! factory.create(Info, ctx) ──► strategy_for(Info) ──► &InfoLevel
//!                           └─► provider.sink_for(ctx) ──► Arc<dyn LogSink>
//!
//! wrapper.emit(args) ──► InfoLevel::write ──► sink.info(args)
//! ```

mod context;
mod factory;
mod levels;
mod wrapper;

pub use context::Context;
pub use factory::LevelStrategyFactory;
pub use levels::{
    strategy_for, DebugLevel, ErrorLevel, InfoLevel, LevelStrategy, OffLevel, TraceLevel,
    WarnLevel,
};
pub use wrapper::LoggerWrapper;
