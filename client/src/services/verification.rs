//! Verification Service

use dash_common::{PendingVerificationsResponse, UpdateVerification, UpdateVerificationResponse};
use tracing::info;

use super::endpoints;
use crate::error::ApiError;
use crate::network::ApiClient;

impl ApiClient {
    pub async fn list_pending_verifications(&self) -> Result<PendingVerificationsResponse, ApiError> {
        self.get(
            endpoints::VERIFICATION_GET_ALL_PENDING,
            "Failed to fetch pending verifications",
        )
        .await
    }

    /// Fail early when no verification update path is configured.
    pub fn ensure_verification_update(&self) -> Result<&str, ApiError> {
        self.verification_update_path()
            .ok_or(ApiError::EndpointNotConfigured("verification update"))
    }

    /// Approve or reject a verification.
    pub async fn update_verification(
        &self,
        update: &UpdateVerification,
    ) -> Result<UpdateVerificationResponse, ApiError> {
        let path = self.ensure_verification_update()?;
        info!(user_id = %update.id, status = %update.status, "Reviewing verification");

        self.patch(path, update, "Failed to update verification")
            .await
    }
}
