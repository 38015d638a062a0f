//! Application state.
//!
//! Shared state for all request handlers.

use signpost_nav::SiteConfig;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Validated navigation model, never mutated after startup.
    pub(crate) site: SiteConfig,
    /// Application version.
    pub(crate) version: String,
}
