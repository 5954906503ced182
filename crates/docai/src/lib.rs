//! Google Document AI backend for finmerge.
//!
//! Sends each PDF inline to a configured processor over the REST API and
//! flattens the returned tables. Requests carry a bearer token: either one
//! fixed in configuration or one obtained, and refreshed before it expires,
//! through Application Default Credentials.

pub mod client;
pub mod error;
pub mod flatten;
pub mod model;

pub use client::DocumentAiClient;
pub use error::DocumentAiError;
pub use flatten::flatten_tables;
