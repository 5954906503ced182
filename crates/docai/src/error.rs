//! Document AI client errors.

use thiserror::Error;

/// Errors raised by the Document AI client.
#[derive(Debug, Error)]
pub enum DocumentAiError {
    /// No access token configured.
    #[error("Document AI access token is not configured")]
    MissingCredentials,

    /// Application Default Credentials could not be resolved or refreshed.
    #[error("Document AI authentication failed: {0}")]
    Auth(#[from] gcp_auth::Error),

    /// Project or processor id missing.
    #[error("Document AI processor is not configured")]
    NotConfigured,

    /// Transport-level failure, including timeouts.
    #[error("Document AI request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Document AI returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("Invalid Document AI response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DocumentAiError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}
