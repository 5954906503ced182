//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - `GET /` and `GET /health` status routes
//! - `POST /upload`, which turns uploaded PDFs into one merged workbook
//! - JSON error responses

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use finmerge_core::BatchProcessor;
use finmerge_docai::DocumentAiClient;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Batch processor with the Document AI backend.
pub type Processor = BatchProcessor<DocumentAiClient>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Runs upload batches.
    pub processor: Arc<Processor>,
    /// Whether cloud extraction is enabled in configuration.
    pub document_ai_enabled: bool,
}

impl AppState {
    /// Create application state.
    #[must_use]
    pub fn new(processor: Processor, document_ai_enabled: bool) -> Self {
        Self {
            processor: Arc::new(processor),
            document_ai_enabled,
        }
    }

    /// Whether a Document AI client was initialized.
    #[must_use]
    pub fn document_ai_available(&self) -> bool {
        self.processor.orchestrator().has_cloud()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.processor.store().max_request_bytes();

    Router::new()
        .merge(routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
