//! Client Error Types

use std::path::PathBuf;

use dash_common::SchemaError;
use thiserror::Error;

/// Failure of a call against the admin API.
///
/// Every variant renders as a human-readable message suitable for a
/// notification; none is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connect, timeout, body read).
    #[error("Connection failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status. `message` is the server's, or the endpoint fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Success status with a body that does not match the schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The endpoint path for this operation is not configured.
    #[error("No endpoint configured for {0}")]
    EndpointNotConfigured(&'static str),

    /// The session could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// HTTP status of the failure, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the server rejected the credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Session persistence error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}
