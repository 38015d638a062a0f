//! Configuration API endpoint.
//!
//! Returns the whole navigation model so clients can render without
//! per-page requests.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use signpost_nav::SiteConfig;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
pub(crate) struct ConfigResponse {
    /// Server version.
    version: String,
    /// Resolved site configuration.
    site: SiteConfig,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        version: state.version.clone(),
        site: state.site.clone(),
    })
}
