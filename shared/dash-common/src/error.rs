//! Schema Error Types

use thiserror::Error;

/// Result alias for schema parsing.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// A backend payload did not match the expected schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Body was not valid JSON, or a required field was missing or mistyped.
    #[error("Unexpected response from {context}: {source}")]
    Malformed {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Body parsed but carries values the client cannot use.
    #[error("Invalid response from {context}: {reason}")]
    Invalid { context: String, reason: String },
}
