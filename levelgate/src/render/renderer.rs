//! Fault-to-text rendering with stack trace deduplication.

use parking_lot::Mutex;
use tracing::debug;

use super::table::{Lookup, RendererStats, TokenTable};
use crate::fault::Fault;
use crate::severity::StackTraceVerbosity;
use crate::strategy::Context;

/// Renders [`Fault`]s for log records.
///
/// With [`StackTraceVerbosity::UniqueOnly`] the first rendering of a fault
/// carries its frames plus a token, and later renderings of a structurally
/// equal fault carry only the token. The token table sits behind one mutex
/// so concurrent first renderings agree on a single token.
///
/// # Example
///
/// ```
/// use levelgate::fault::Fault;
/// use levelgate::render::ThrowableRenderer;
/// use levelgate::severity::StackTraceVerbosity;
/// use levelgate::strategy::Context;
///
/// let renderer = ThrowableRenderer::new();
/// let context = Context::named("app::Fetcher").unwrap();
/// let fault = Fault::new("Timeout", "upstream slow").with_frames(["app::Fetcher::get"]);
///
/// let first = renderer.render(&fault, StackTraceVerbosity::UniqueOnly, &context);
/// let again = renderer.render(&fault, StackTraceVerbosity::UniqueOnly, &context);
/// assert!(first.contains("at app::Fetcher::get"));
/// assert!(!again.contains("at app::Fetcher::get"));
/// ```
#[derive(Debug)]
pub struct ThrowableRenderer {
    table: Mutex<TokenTable>,
}

impl ThrowableRenderer {
    /// Create a renderer with an unbounded token table.
    pub fn new() -> Self {
        Self {
            table: Mutex::new(TokenTable::new(None)),
        }
    }

    /// Create a renderer whose table holds at most `capacity` faults.
    ///
    /// A capacity of zero means unbounded.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Mutex::new(TokenTable::new(Some(capacity))),
        }
    }

    /// Table bound, or `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.table.lock().capacity()
    }

    /// Render `fault` as it should appear in a record logged from `context`.
    pub fn render(
        &self,
        fault: &Fault,
        verbosity: StackTraceVerbosity,
        context: &Context,
    ) -> String {
        match verbosity {
            StackTraceVerbosity::Full => render_full(fault, context, None),
            StackTraceVerbosity::UniqueOnly => {
                let fingerprint = fault.fingerprint();
                let lookup = self.table.lock().lookup_or_insert(&fingerprint);
                match lookup {
                    Lookup::Minted { token, evicted } => {
                        debug!(
                            token = %token,
                            evicted = ?evicted,
                            fault_type = fault.type_name(),
                            "Minted stack trace token"
                        );
                        render_full(fault, context, Some(&token))
                    }
                    Lookup::Seen(token) => render_repeat(fault, context, &token),
                }
            }
        }
    }

    /// Snapshot of table counters.
    pub fn stats(&self) -> RendererStats {
        self.table.lock().stats()
    }
}

impl Default for ThrowableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn header(fault: &Fault, context: &Context) -> String {
    format!(
        "[{}] {}: {}",
        context.simple_name(),
        fault.type_name(),
        fault.message()
    )
}

fn render_full(fault: &Fault, context: &Context, token: Option<&str>) -> String {
    let mut out = header(fault, context);
    if let Some(token) = token {
        out.push_str(" [");
        out.push_str(token);
        out.push(']');
    }
    for frame in fault.frames() {
        out.push_str("\n    at ");
        out.push_str(frame);
    }
    for cause in fault.causes() {
        out.push_str("\nCaused by: ");
        out.push_str(cause);
    }
    out
}

fn render_repeat(fault: &Fault, context: &Context, token: &str) -> String {
    format!("{} [{} repeated]", header(fault, context), token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn context() -> Context {
        Context::named("billing::InvoiceJob").unwrap()
    }

    fn fault() -> Fault {
        Fault::new("ConnectError", "refused")
            .with_frames(["billing::InvoiceJob::send", "billing::run"])
            .with_cause("os error 111")
    }

    fn token_of(rendered: &str) -> &str {
        let start = rendered.find("[fault-").expect("no token") + 1;
        &rendered[start..start + "fault-".len() + 8]
    }

    #[test]
    fn test_full_contains_everything() {
        let renderer = ThrowableRenderer::new();
        let text = renderer.render(&fault(), StackTraceVerbosity::Full, &context());
        assert_eq!(
            text,
            "[InvoiceJob] ConnectError: refused\n    \
             at billing::InvoiceJob::send\n    \
             at billing::run\n\
             Caused by: os error 111"
        );
    }

    #[test]
    fn test_full_never_dedups() {
        let renderer = ThrowableRenderer::new();
        let first = renderer.render(&fault(), StackTraceVerbosity::Full, &context());
        let second = renderer.render(&fault(), StackTraceVerbosity::Full, &context());
        assert_eq!(first, second);
        assert_eq!(renderer.stats().tokens_minted, 0);
    }

    #[test]
    fn test_unique_only_first_is_full_with_token() {
        let renderer = ThrowableRenderer::new();
        let text = renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
        assert!(text.starts_with("[InvoiceJob] ConnectError: refused [fault-"));
        assert!(text.contains("at billing::run"));
        assert!(text.contains("Caused by: os error 111"));
    }

    #[test]
    fn test_unique_only_first_exact_shape() {
        let renderer = ThrowableRenderer::new();
        let text = renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
        let token = token_of(&text);
        assert_eq!(
            text,
            format!(
                "[InvoiceJob] ConnectError: refused [{}]\n    \
                 at billing::InvoiceJob::send\n    \
                 at billing::run\n\
                 Caused by: os error 111",
                token
            )
        );
    }

    #[test]
    fn test_unique_only_repeat_has_token_only() {
        let renderer = ThrowableRenderer::new();
        let first = renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
        let second = renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
        let token = token_of(&first);

        assert_eq!(
            second,
            format!("[InvoiceJob] ConnectError: refused [{} repeated]", token)
        );
        assert!(!second.contains("at billing"));
    }

    #[test]
    fn test_repeat_token_is_stable() {
        let renderer = ThrowableRenderer::new();
        let first = renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
        let token = token_of(&first).to_string();
        for _ in 0..5 {
            let again = renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
            assert_eq!(token_of(&again), token);
        }
    }

    #[test]
    fn test_full_does_not_consume_token() {
        let renderer = ThrowableRenderer::new();
        renderer.render(&fault(), StackTraceVerbosity::Full, &context());
        let text = renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
        assert!(text.contains("at billing::run"));
    }

    #[test]
    fn test_concurrent_first_renderings_share_one_token() {
        let renderer = Arc::new(ThrowableRenderer::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let renderer = Arc::clone(&renderer);
                thread::spawn(move || {
                    let text =
                        renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
                    token_of(&text).to_string()
                })
            })
            .collect();

        let tokens: HashSet<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(renderer.stats().tokens_minted, 1);
        assert_eq!(renderer.stats().repeats_suppressed, 7);
    }

    #[test]
    fn test_evicted_fault_renders_in_full_again() {
        let renderer = ThrowableRenderer::with_capacity(1);
        let other = Fault::new("Other", "x");
        renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
        renderer.render(&other, StackTraceVerbosity::UniqueOnly, &context());
        let text = renderer.render(&fault(), StackTraceVerbosity::UniqueOnly, &context());
        assert!(text.contains("at billing::run"));
        assert_eq!(renderer.stats().evictions, 2);
        assert_eq!(renderer.capacity(), Some(1));
    }
}
