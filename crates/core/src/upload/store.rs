//! Scoped staging of uploaded files on local disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use finmerge_shared::UploadSettings;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::error::UploadError;
use super::filename::{has_allowed_extension, sanitize_filename};

/// One uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied filename, unsanitized.
    pub filename: String,
    /// Raw bytes.
    pub content: Vec<u8>,
}

impl UploadedFile {
    /// Create an uploaded file.
    #[must_use]
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

/// The upload directory and its acceptance rules.
#[derive(Debug, Clone)]
pub struct UploadStore {
    directory: PathBuf,
    allowed_extensions: Vec<String>,
    max_request_bytes: usize,
}

impl UploadStore {
    /// Builds a store from settings, creating the directory if needed.
    pub fn from_settings(settings: &UploadSettings) -> Result<Self, UploadError> {
        let directory = PathBuf::from(&settings.directory);
        fs::create_dir_all(&directory)
            .map_err(|e| UploadError::Directory(format!("{}: {e}", settings.directory)))?;

        Ok(Self {
            directory,
            allowed_extensions: settings.allowed_extensions.clone(),
            max_request_bytes: settings.max_request_bytes,
        })
    }

    /// Directory staged files are written to.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Largest accepted request body.
    #[must_use]
    pub fn max_request_bytes(&self) -> usize {
        self.max_request_bytes
    }

    /// Whether the filename has an accepted extension.
    #[must_use]
    pub fn is_allowed(&self, filename: &str) -> bool {
        has_allowed_extension(filename, &self.allowed_extensions)
    }

    /// Writes `file` to the upload directory for the lifetime of the
    /// returned scope.
    ///
    /// The on-disk name is `{timestamp}_{random}_{sanitized name}`.
    pub fn stage(&self, file: &UploadedFile) -> Result<ScopedUpload, UploadError> {
        if !self.is_allowed(&file.filename) {
            return Err(UploadError::not_allowed(&file.filename));
        }

        let filename = sanitize_filename(&file.filename);
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let mut temp = tempfile::Builder::new()
            .prefix(&format!("{timestamp}_"))
            .suffix(&format!("_{filename}"))
            .tempfile_in(&self.directory)?;
        temp.write_all(&file.content)?;
        temp.flush()?;

        debug!(file = %filename, path = %temp.path().display(), "Staged upload");
        Ok(ScopedUpload { temp, filename })
    }
}

/// A staged upload, removed from disk when dropped or closed.
#[derive(Debug)]
pub struct ScopedUpload {
    temp: NamedTempFile,
    filename: String,
}

impl ScopedUpload {
    /// Sanitized filename.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// On-disk location.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Reads the staged bytes back.
    pub fn read(&self) -> Result<Vec<u8>, UploadError> {
        Ok(fs::read(self.temp.path())?)
    }

    /// Removes the file, logging rather than returning a failure.
    pub fn close(self) {
        let filename = self.filename;
        if let Err(e) = self.temp.close() {
            warn!(file = %filename, error = %e, "Failed to remove staged upload");
        }
    }
}
