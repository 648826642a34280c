//! Integration tests for stack trace deduplication.
//!
//! These tests verify token behavior across the whole façade:
//! - First occurrence prints the trace with a token, repeats print the token only
//! - Tokens are stable per fault and distinct across faults
//! - Faults captured from real errors at one call site dedup in a loop
//! - Errors carrying their own backtrace dedup by origin, not by handler
//! - Bounded tables evict and re-mint

use std::backtrace::Backtrace;
use std::fmt;
use std::io;
use std::sync::Arc;

use levelgate::fault::Fault;
use levelgate::render::{ThrowableRenderer, TOKEN_PREFIX};
use levelgate::service::LoggingService;
use levelgate::severity::{Severity, StackTraceVerbosity};
use levelgate::sink::{MemorySink, SharedSinkProvider};
use levelgate::strategy::{Context, LevelStrategyFactory, LoggerWrapper};

// =============================================================================
// Test Helpers
// =============================================================================

struct Uploader;

fn setup(service: LoggingService) -> (LoggingService, LoggerWrapper, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let factory = LevelStrategyFactory::new(Arc::new(SharedSinkProvider::new(sink.clone())));
    let wrapper = factory.create_for::<Uploader>(Severity::Warn);
    (service, wrapper, sink)
}

fn timeout() -> Fault {
    Fault::new("Timeout", "upload stalled").with_frames([
        "net::Uploader::send_chunk",
        "net::Uploader::upload",
    ])
}

/// Extract the `fault-xxxxxxxx` token from a rendered record.
fn token_of(record: &str) -> String {
    let start = record.find(TOKEN_PREFIX).expect("record has no token");
    record[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

fn upload() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::TimedOut, "chunk stalled"))
}

/// Error that records where it was created.
#[derive(Debug)]
struct LookupError {
    key: &'static str,
    backtrace: Backtrace,
}

impl LookupError {
    #[inline(never)]
    fn new(key: &'static str) -> Self {
        Self {
            key,
            backtrace: Backtrace::force_capture(),
        }
    }

    fn fault(&self) -> Fault {
        Fault::from_backtrace(self, &self.backtrace)
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no entry for '{}'", self.key)
    }
}

impl std::error::Error for LookupError {}

#[inline(never)]
fn from_cache(key: &'static str) -> Result<(), LookupError> {
    Err(LookupError::new(key))
}

#[inline(never)]
fn from_index(key: &'static str) -> Result<(), LookupError> {
    Err(LookupError::new(key))
}

// =============================================================================
// Unique-only rendering
// =============================================================================

#[test]
fn test_second_occurrence_has_token_and_no_frames() {
    let (service, warn, sink) = setup(LoggingService::default());

    for _ in 0..2 {
        service
            .log_throwable(&warn, StackTraceVerbosity::UniqueOnly, "upload failed", &timeout())
            .unwrap();
    }

    let texts = sink.texts(Severity::Warn);
    assert_eq!(texts.len(), 2);

    let first_token = token_of(&texts[0]);
    assert!(texts[0].contains("at net::Uploader::send_chunk"));
    assert!(texts[0].contains("[Uploader]"));

    assert!(!texts[1].contains("at net::Uploader"));
    assert!(texts[1].contains(&format!("{} repeated", first_token)));
    assert_eq!(token_of(&texts[1]), first_token);
}

#[test]
fn test_distinct_faults_get_distinct_tokens() {
    let (service, warn, sink) = setup(LoggingService::default());
    let other = Fault::new("Refused", "connection refused").with_frames(["net::Uploader::connect"]);

    for fault in [&timeout(), &other, &timeout(), &other] {
        service
            .log_throwable(&warn, StackTraceVerbosity::UniqueOnly, "upload failed", fault)
            .unwrap();
    }

    let tokens: Vec<String> = sink.texts(Severity::Warn).iter().map(|t| token_of(t)).collect();
    assert_ne!(tokens[0], tokens[1]);
    assert_eq!(tokens[0], tokens[2]);
    assert_eq!(tokens[1], tokens[3]);
    assert_eq!(service.renderer().stats().tokens_minted, 2);
}

#[test]
fn test_token_shared_across_contexts() {
    let renderer = ThrowableRenderer::new();
    let a = Context::named("jobs::Uploader").unwrap();
    let b = Context::named("jobs::Downloader").unwrap();

    let first = renderer.render(&timeout(), StackTraceVerbosity::UniqueOnly, &a);
    let second = renderer.render(&timeout(), StackTraceVerbosity::UniqueOnly, &b);

    assert_eq!(token_of(&first), token_of(&second));
    assert!(second.starts_with("[Downloader]"));
}

#[test]
fn test_full_after_unique_still_prints_trace() {
    let (service, warn, sink) = setup(LoggingService::default());

    service
        .log_throwable(&warn, StackTraceVerbosity::UniqueOnly, "first", &timeout())
        .unwrap();
    service
        .log_throwable(&warn, StackTraceVerbosity::Full, "second", &timeout())
        .unwrap();

    let texts = sink.texts(Severity::Warn);
    assert!(texts[1].contains("at net::Uploader::upload"));
    assert!(!texts[1].contains(TOKEN_PREFIX));
}

// =============================================================================
// Captured faults
// =============================================================================

#[test]
fn test_retry_loop_dedups_captured_faults() {
    let (service, warn, sink) = setup(LoggingService::default());

    for attempt in 1..=5 {
        if let Err(e) = upload() {
            let fault = Fault::capture(&e);
            service
                .format_then_log_throwable(
                    &warn,
                    StackTraceVerbosity::UniqueOnly,
                    &fault,
                    "upload attempt %d failed",
                    &[&attempt],
                )
                .unwrap();
        }
    }

    let texts = sink.texts(Severity::Warn);
    assert_eq!(texts.len(), 5);
    assert!(texts[0].starts_with("upload attempt 1 failed "));
    let token = token_of(&texts[0]);
    for record in &texts[1..] {
        assert!(record.contains(&format!("{} repeated", token)));
    }

    let stats = service.renderer().stats();
    assert_eq!(stats.tokens_minted, 1);
    assert_eq!(stats.repeats_suppressed, 4);
}

#[test]
fn test_error_logged_by_inner_and_outer_handler_shares_token() {
    let (service, warn, sink) = setup(LoggingService::default());
    let log = |message: &str, err: &LookupError| {
        service
            .log_throwable(&warn, StackTraceVerbosity::UniqueOnly, message, &err.fault())
            .unwrap();
    };

    let inner = || {
        from_cache("tile-7").map_err(|e| {
            log("cache lookup failed", &e);
            e
        })
    };
    if let Err(e) = inner() {
        log("request failed", &e);
    }

    let texts = sink.texts(Severity::Warn);
    assert_eq!(texts.len(), 2);
    assert!(texts[0].contains("from_cache"));
    assert!(texts[1].contains(&format!("{} repeated", token_of(&texts[0]))));
    assert_eq!(service.renderer().stats().tokens_minted, 1);
}

#[test]
fn test_same_message_from_different_origins_is_not_deduped() {
    let (service, warn, sink) = setup(LoggingService::default());

    for result in [from_cache("tile-7"), from_index("tile-7")] {
        if let Err(e) = result {
            service
                .log_throwable(&warn, StackTraceVerbosity::UniqueOnly, "lookup failed", &e.fault())
                .unwrap();
        }
    }

    let texts = sink.texts(Severity::Warn);
    assert!(texts[0].contains("from_cache"));
    assert!(texts[1].contains("from_index"));
    assert!(!texts[1].contains("repeated"));
    assert_ne!(token_of(&texts[0]), token_of(&texts[1]));
}

// =============================================================================
// Bounded table
// =============================================================================

#[test]
fn test_bounded_renderer_re_mints_after_eviction() {
    let service = LoggingService::new(
        Arc::new(levelgate::format::PrintfFormatter::new()),
        Arc::new(ThrowableRenderer::with_capacity(1)),
    );
    let (service, warn, sink) = setup(service);
    let other = Fault::new("Refused", "connection refused");

    for fault in [&timeout(), &other, &timeout()] {
        service
            .log_throwable(&warn, StackTraceVerbosity::UniqueOnly, "failed", fault)
            .unwrap();
    }

    let texts = sink.texts(Severity::Warn);
    // timeout was evicted by `other`, so its third occurrence prints in full
    assert!(texts[2].contains("at net::Uploader::send_chunk"));
    assert!(!texts[2].contains("repeated"));
    assert_eq!(service.renderer().stats().evictions, 2);
}
