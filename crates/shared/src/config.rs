//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upload handling configuration.
    #[serde(default)]
    pub upload: UploadSettings,
    /// Google Document AI configuration.
    #[serde(default)]
    pub document_ai: DocumentAiConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Upload configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    /// Directory holding per-request temporary uploads.
    #[serde(default = "default_upload_dir")]
    pub directory: String,
    /// Maximum request body size in bytes.
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,
    /// Accepted file extensions (lowercase, without the dot).
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            directory: default_upload_dir(),
            max_request_bytes: default_max_request_bytes(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_max_request_bytes() -> usize {
    16 * 1024 * 1024 // 16 MiB
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["pdf".to_string()]
}

/// Google Document AI configuration.
///
/// None of these values are validated beyond presence: a missing project or
/// processor simply makes the cloud backend report itself unavailable.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentAiConfig {
    /// Whether cloud extraction should be attempted at all.
    #[serde(default)]
    pub enabled: bool,
    /// GCP project identifier.
    #[serde(default)]
    pub project_id: String,
    /// Document AI processor identifier.
    #[serde(default)]
    pub processor_id: String,
    /// Processor region.
    #[serde(default = "default_location")]
    pub location: String,
    /// Fixed OAuth2 bearer token for the `:process` call. When absent,
    /// Application Default Credentials are used.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Endpoint override (defaults to `https://{location}-documentai.googleapis.com`).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DocumentAiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            project_id: String::new(),
            processor_id: String::new(),
            location: default_location(),
            access_token: None,
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_location() -> String {
    "us".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl DocumentAiConfig {
    /// Returns the fully qualified processor name, if both identifiers are set.
    ///
    /// Format: `projects/{project}/locations/{location}/processors/{processor}`
    #[must_use]
    pub fn processor_name(&self) -> Option<String> {
        if self.project_id.is_empty() || self.processor_id.is_empty() {
            return None;
        }
        Some(format!(
            "projects/{}/locations/{}/processors/{}",
            self.project_id, self.location, self.processor_id
        ))
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// `FINMERGE__*` variables, then the legacy variables `USE_DOCUMENT_AI`,
    /// `GCP_PROJECT_ID`, `DOCUMENT_AI_PROCESSOR_ID`, `GCP_LOCATION` and `PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINMERGE").separator("__"))
            .set_override_option(
                "document_ai.enabled",
                legacy_var("USE_DOCUMENT_AI").map(|v| v.eq_ignore_ascii_case("true")),
            )?
            .set_override_option("document_ai.project_id", legacy_var("GCP_PROJECT_ID"))?
            .set_override_option(
                "document_ai.processor_id",
                legacy_var("DOCUMENT_AI_PROCESSOR_ID"),
            )?
            .set_override_option("document_ai.location", legacy_var("GCP_LOCATION"))?
            .set_override_option("server.port", legacy_var("PORT"))?
            .build()?;

        config.try_deserialize()
    }
}

fn legacy_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
