//! Upload intake: filename rules and per-document disk scopes.
//!
//! Every accepted file is written to the upload directory under a unique
//! timestamped name and removed again as soon as its [`ScopedUpload`] ends,
//! whether extraction succeeded or not.

mod error;
mod filename;
mod store;

pub use error::UploadError;
pub use filename::{FALLBACK_FILENAME, has_allowed_extension, sanitize_filename};
pub use store::{ScopedUpload, UploadStore, UploadedFile};
