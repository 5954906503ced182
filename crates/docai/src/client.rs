//! REST client for a Document AI processor.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use finmerge_core::extraction::{CloudExtractor, ExtractionError};
use finmerge_core::Table;
use finmerge_shared::DocumentAiConfig;
use gcp_auth::TokenProvider;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::error::DocumentAiError;
use crate::flatten::flatten_tables;
use crate::model::{Document, PDF_MIME_TYPE, ProcessRequest, ProcessResponse, RawDocument};

/// OAuth2 scope required by the `process` method.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Where bearer tokens come from.
#[derive(Clone)]
enum Credentials {
    /// Token fixed in configuration.
    Static(String),
    /// Application Default Credentials; tokens are cached and refreshed by
    /// the provider.
    ApplicationDefault(Arc<dyn TokenProvider>),
}

impl Credentials {
    async fn bearer(&self) -> Result<String, DocumentAiError> {
        match self {
            Self::Static(token) => Ok(token.clone()),
            Self::ApplicationDefault(provider) => {
                let token = provider.token(&[CLOUD_PLATFORM_SCOPE]).await?;
                Ok(token.as_str().to_string())
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Static(_) => "Static(..)",
            Self::ApplicationDefault(_) => "ApplicationDefault",
        })
    }
}

/// Client for one configured processor.
#[derive(Debug, Clone)]
pub struct DocumentAiClient {
    http: Client,
    endpoint: String,
    processor_name: Option<String>,
    credentials: Credentials,
}

impl DocumentAiClient {
    /// Builds a client that authenticates with the configured access token.
    ///
    /// A missing project or processor id does not fail construction; such a
    /// client reports itself unavailable on every call.
    pub fn new(config: &DocumentAiConfig) -> Result<Self, DocumentAiError> {
        let token = static_token(config).ok_or(DocumentAiError::MissingCredentials)?;
        Self::build(config, Credentials::Static(token))
    }

    /// Builds a client, preferring a configured access token and otherwise
    /// resolving Application Default Credentials.
    pub async fn connect(config: &DocumentAiConfig) -> Result<Self, DocumentAiError> {
        if let Some(token) = static_token(config) {
            return Self::build(config, Credentials::Static(token));
        }

        let provider = gcp_auth::provider().await?;
        info!("Using Application Default Credentials for Document AI");
        Self::build(config, Credentials::ApplicationDefault(provider))
    }

    fn build(config: &DocumentAiConfig, credentials: Credentials) -> Result<Self, DocumentAiError> {
        let endpoint = config.endpoint.clone().unwrap_or_else(|| {
            format!("https://{}-documentai.googleapis.com", config.location)
        });

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            processor_name: config.processor_name(),
            credentials,
        })
    }

    /// Full resource name of the processor, if configured.
    #[must_use]
    pub fn processor_name(&self) -> Option<&str> {
        self.processor_name.as_deref()
    }

    /// URL of the `process` method.
    pub fn process_url(&self) -> Result<String, DocumentAiError> {
        let name = self
            .processor_name
            .as_deref()
            .ok_or(DocumentAiError::NotConfigured)?;
        Ok(format!("{}/v1/{name}:process", self.endpoint))
    }

    /// Sends a PDF to the processor and returns the processed document.
    pub async fn process(&self, pdf: &[u8]) -> Result<Document, DocumentAiError> {
        let url = self.process_url()?;
        let body = ProcessRequest {
            raw_document: RawDocument {
                content: STANDARD.encode(pdf),
                mime_type: PDF_MIME_TYPE,
            },
        };

        let token = self.credentials.bearer().await?;

        debug!(url = %url, bytes = pdf.len(), "Calling Document AI");
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocumentAiError::status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        let parsed: ProcessResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed.document)
    }
}

fn static_token(config: &DocumentAiConfig) -> Option<String> {
    config
        .access_token
        .clone()
        .filter(|t| !t.trim().is_empty())
}

impl CloudExtractor for DocumentAiClient {
    async fn extract_tables(&self, pdf: &[u8]) -> Result<Vec<Table>, ExtractionError> {
        if self.processor_name.is_none() {
            return Err(ExtractionError::unavailable(
                DocumentAiError::NotConfigured.to_string(),
            ));
        }

        match self.process(pdf).await {
            Ok(document) => {
                let tables = flatten_tables(&document);
                debug!(
                    pages = document.pages.len(),
                    tables = tables.len(),
                    "Document AI processed document"
                );
                Ok(tables)
            }
            Err(e) => {
                warn!(error = %e, "Document AI processing error");
                Err(ExtractionError::transport(e.to_string()))
            }
        }
    }
}
