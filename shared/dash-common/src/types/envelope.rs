//! Response Envelopes

use serde::{Deserialize, Serialize};

use crate::Validate;

/// `{message, data}` wrapper every read endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl<T: Validate> Validate for Envelope<T> {
    fn validate(&self) -> Result<(), String> {
        self.data.validate()
    }
}

/// `{message, data?}` wrapper returned by mutation endpoints. `data` carries the
/// updated record when the backend chooses to send it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationEnvelope<T> {
    #[serde(default)]
    pub message: String,
    /// A missing key reads as `None`; no `default` attribute, which would
    /// require `T: Default`.
    pub data: Option<T>,
}

impl<T: Validate> Validate for MutationEnvelope<T> {
    fn validate(&self) -> Result<(), String> {
        self.data.validate()
    }
}

/// Error body returned alongside non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    /// Record type with no `Default` impl.
    #[derive(Debug, Deserialize)]
    struct Item {
        id: String,
    }

    impl Validate for Item {}

    #[test]
    fn test_mutation_envelope_without_default_record() {
        let missing = parse::<MutationEnvelope<Item>>("update", br#"{"message":"Saved"}"#).unwrap();
        assert_eq!(missing.message, "Saved");
        assert!(missing.data.is_none());

        let null = parse::<MutationEnvelope<Item>>("update", br#"{"data":null}"#).unwrap();
        assert!(null.data.is_none());

        let present =
            parse::<MutationEnvelope<Item>>("update", br#"{"message":"ok","data":{"id":"u1"}}"#)
                .unwrap();
        assert_eq!(present.data.unwrap().id, "u1");
    }
}
