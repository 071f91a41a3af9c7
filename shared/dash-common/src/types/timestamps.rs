//! Record Timestamps
//!
//! The backend emits both `createdAt` and `created_at` (sometimes on the same
//! record), so both spellings are kept and read through one accessor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation/update times of a record, under either naming convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub legacy_created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updated_at", default, skip_serializing_if = "Option::is_none")]
    pub legacy_updated_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Timestamps with only a creation time.
    #[must_use]
    pub const fn created(at: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(at),
            updated_at: None,
            legacy_created_at: None,
            legacy_updated_at: None,
        }
    }

    /// Creation time, preferring the camelCase field.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.or(self.legacy_created_at)
    }

    /// Last update time, preferring the camelCase field.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.legacy_updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(flatten)]
        timestamps: Timestamps,
    }

    #[test]
    fn test_reads_either_spelling() {
        let camel: Holder = serde_json::from_str(r#"{"createdAt":"2024-01-15T10:00:00Z"}"#).unwrap();
        let snake: Holder =
            serde_json::from_str(r#"{"created_at":"2024-01-15T10:00:00.000Z"}"#).unwrap();
        assert!(camel.timestamps.created_at().is_some());
        assert_eq!(camel.timestamps.created_at(), snake.timestamps.created_at());
    }

    #[test]
    fn test_camel_case_wins_when_both_present() {
        let both: Holder = serde_json::from_str(
            r#"{"createdAt":"2024-02-01T00:00:00Z","created_at":"2023-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let created = both.timestamps.created_at().unwrap();
        assert_eq!(created.to_rfc3339(), "2024-02-01T00:00:00+00:00");
    }

    #[test]
    fn test_missing_timestamps_are_none() {
        let none: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(none.timestamps.created_at(), None);
        assert_eq!(none.timestamps.updated_at(), None);
    }
}
