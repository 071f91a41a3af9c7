//! Dash Admin Common Library
//!
//! Typed schemas for every payload the admin backend returns, plus the
//! fallible parse entry point used at the network boundary.

pub mod error;
pub mod record;
pub mod types;

pub use error::{Result, SchemaError};
pub use record::{Record, Searchable};
pub use types::*;

/// Version of the backend payload schema these types mirror.
pub const SCHEMA_VERSION: u32 = 1;

/// Parse a response body into a typed payload.
///
/// `context` names the endpoint (or other source) so the error says where the
/// mismatch happened.
pub fn parse<T>(context: &str, body: &[u8]) -> Result<T>
where
    T: serde::de::DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(body).map_err(|source| SchemaError::Malformed {
        context: context.to_string(),
        source,
    })?;
    value.validate().map_err(|reason| SchemaError::Invalid {
        context: context.to_string(),
        reason,
    })?;
    Ok(value)
}

/// Post-deserialization checks serde cannot express.
pub trait Validate {
    /// Return a reason string when the payload is structurally valid JSON but
    /// semantically unusable.
    fn validate(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> std::result::Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, item)| item.validate().map_err(|e| format!("[{i}]: {e}")))
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> std::result::Result<(), String> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}
