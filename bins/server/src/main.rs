//! finmerge API Server
//!
//! Main entry point: loads configuration, initializes the optional Document
//! AI client and serves the upload API.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finmerge_api::{AppState, Processor, create_router};
use finmerge_core::ExtractionOrchestrator;
use finmerge_core::upload::UploadStore;
use finmerge_docai::DocumentAiClient;
use finmerge_shared::{AppConfig, DocumentAiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finmerge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let cloud = init_document_ai(&config.document_ai).await;
    let store = UploadStore::from_settings(&config.upload)?;
    info!(
        directory = %store.directory().display(),
        max_request_bytes = store.max_request_bytes(),
        "Upload directory ready"
    );

    let processor = Processor::new(ExtractionOrchestrator::new(cloud), store);
    let state = AppState::new(processor, config.document_ai.enabled);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the Document AI client when enabled. Failures are logged and
/// leave the service on local extraction.
async fn init_document_ai(config: &DocumentAiConfig) -> Option<DocumentAiClient> {
    if !config.enabled {
        info!("Document AI disabled, using local PDF extraction");
        return None;
    }

    match DocumentAiClient::connect(config).await {
        Ok(client) => {
            match client.processor_name() {
                Some(name) => info!(processor = %name, "Document AI client initialized"),
                None => warn!("Document AI enabled but project or processor id is missing"),
            }
            Some(client)
        }
        Err(e) => {
            warn!(error = %e, "Failed to initialize Document AI client, using local extraction");
            None
        }
    }
}
