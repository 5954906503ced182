//! Shared errors and configuration for finmerge.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, DocumentAiConfig, ServerConfig, UploadSettings};
pub use error::AppError;
