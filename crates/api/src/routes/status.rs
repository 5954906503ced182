//! Service status endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Which extraction backends can be used.
#[derive(Serialize)]
pub struct StatusResponse {
    /// Cloud extraction enabled in configuration and its client initialized.
    pub document_ai_enabled: bool,
    /// The Document AI client is compiled in.
    pub library_available: bool,
}

async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        document_ai_enabled: state.document_ai_enabled && state.document_ai_available(),
        library_available: true,
    })
}

/// Creates status routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(status))
}
