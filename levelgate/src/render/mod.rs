//! Rendering captured faults into log text.
//!
//! - `ThrowableRenderer`: full or deduplicated rendering
//! - `RendererStats`: token table counters
//!
//! Output shapes, for a fault logged from `app::Fetcher`:
//!
//! ```text
//! [Fetcher] Timeout: upstream slow                      (Full)
//!     at app::Fetcher::get
//! Caused by: deadline elapsed
//!
//! [Fetcher] Timeout: upstream slow [fault-1a2b3c4d]     (UniqueOnly, first)
//!     at app::Fetcher::get
//! Caused by: deadline elapsed
//!
//! [Fetcher] Timeout: upstream slow [fault-1a2b3c4d repeated]
//! ```

mod renderer;
mod table;

pub use renderer::ThrowableRenderer;
pub use table::{RendererStats, TOKEN_PREFIX};
