//! Identity Verification Types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Envelope, MutationEnvelope, Timestamps};
use crate::{Record, Searchable, Validate};

/// Review state of a submitted identity document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Approved => f.write_str("approved"),
            Self::Rejected => f.write_str("rejected"),
        }
    }
}

/// Unreviewed records store `reason` as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A verification submission, with the owner's details denormalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVerification {
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Video or image URL of the submitted document.
    pub document: String,
    pub status: VerificationStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reason: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Record for PendingVerification {
    fn id(&self) -> &str {
        &self.user_id
    }
}

impl Searchable for PendingVerification {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.full_name, &self.email]
    }
}

impl Validate for PendingVerification {
    fn validate(&self) -> Result<(), String> {
        if self.user_id.is_empty() {
            return Err(format!("verification for '{}' has an empty userId", self.email));
        }
        Ok(())
    }
}

/// Body of the approve/reject request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateVerification {
    pub id: String,
    pub status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Review outcome echoed by the update endpoint. Full verification records
/// parse as this too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReview {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub status: VerificationStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reason: String,
}

impl Validate for VerificationReview {}

pub type PendingVerificationsResponse = Envelope<Vec<PendingVerification>>;
pub type UpdateVerificationResponse = MutationEnvelope<VerificationReview>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_parses_pending_list() {
        let body = br#"{"message":"ok","data":[{
            "userId":"v1","document":"https://cdn.example/v1.mp4","status":"pending","reason":"",
            "full_name":"Emily Davis","email":"emily@email.com","avatar":"https://cdn.example/a.jpg",
            "createdAt":"2024-01-20T08:30:00Z","updatedAt":"2024-01-20T08:30:00Z"}]}"#;
        let items = parse::<PendingVerificationsResponse>("pending-verification", body)
            .unwrap()
            .data;
        assert_eq!(items[0].id(), "v1");
        assert_eq!(items[0].status, VerificationStatus::Pending);
        assert!(items[0].timestamps.updated_at().is_some());
    }

    #[test]
    fn test_review_accepts_partial_and_full_records() {
        let partial = br#"{"message":"Verification approved","data":{"status":"approved","reason":""}}"#;
        let review = parse::<UpdateVerificationResponse>("update-verification", partial)
            .unwrap()
            .data
            .unwrap();
        assert_eq!(review.status, VerificationStatus::Approved);
        assert_eq!(review.user_id, None);

        let full = br#"{"message":"ok","data":{"userId":"v1","document":"d","status":"rejected",
            "reason":"blurry","full_name":"E","email":"e@x"}}"#;
        let review = parse::<UpdateVerificationResponse>("update-verification", full)
            .unwrap()
            .data
            .unwrap();
        assert_eq!(review.user_id.as_deref(), Some("v1"));
        assert_eq!(review.reason, "blurry");
    }

    #[test]
    fn test_null_reason_reads_as_empty() {
        let body = br#"{"message":"ok","data":[
            {"userId":"v1","document":"d","status":"pending","reason":null,
             "full_name":"Emily Davis","email":"emily@email.com"},
            {"userId":"v2","document":"d","status":"pending",
             "full_name":"Lin Chen","email":"lin@email.com"}]}"#;
        let items = parse::<PendingVerificationsResponse>("pending-verification", body)
            .unwrap()
            .data;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].reason, "");
        assert_eq!(items[1].reason, "");

        let review = parse::<UpdateVerificationResponse>(
            "update-verification",
            br#"{"data":{"status":"approved","reason":null}}"#,
        )
        .unwrap()
        .data
        .unwrap();
        assert_eq!(review.reason, "");
    }

    #[test]
    fn test_reason_is_omitted_when_absent() {
        let body = UpdateVerification {
            id: "v1".into(),
            status: VerificationStatus::Approved,
            reason: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"id": "v1", "status": "approved"})
        );
    }
}
