//! Page shell API endpoint.
//!
//! Returns the navigation surface (nav, sidebar, locale switcher, pager)
//! for a single page.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use signpost_nav::PageShell;

use crate::handlers::to_url_path;
use crate::state::AppState;

/// Handle GET /api/shell/ (root page).
pub(crate) async fn get_root_shell(State(state): State<Arc<AppState>>) -> Json<PageShell> {
    Json(state.site.page_shell("/"))
}

/// Handle GET /api/shell/{*path}.
pub(crate) async fn get_shell(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Json<PageShell> {
    let url_path = to_url_path(&path);
    tracing::debug!(path = %url_path, "Resolving page shell");
    Json(state.site.page_shell(&url_path))
}
