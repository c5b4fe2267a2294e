//! Cross-cutting error types for spoke.
//!
//! Extraction failures (`StructuralError`) and configuration failures
//! (`ConfigError`) live in their own crates. A unified error is deferred to
//! `spoke-cli`, where everything converges on `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any spoke crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog schema list or label the locator cannot work with.
    #[error("Invalid schema value for '{field}': {reason}")]
    InvalidSchema { field: &'static str, reason: String },
}
