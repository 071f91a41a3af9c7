//! Users Service

use dash_common::{UpdateUserStatus, UpdateUserStatusResponse, UserStatus, UsersResponse};
use tracing::info;

use super::endpoints;
use crate::error::ApiError;
use crate::network::ApiClient;

impl ApiClient {
    pub async fn list_users(&self) -> Result<UsersResponse, ApiError> {
        self.get(endpoints::USERS_GET_ALL, "Failed to fetch users")
            .await
    }

    /// Set a user's moderation status. The response may carry the updated user.
    pub async fn update_user_status(
        &self,
        id: &str,
        status: UserStatus,
    ) -> Result<UpdateUserStatusResponse, ApiError> {
        info!(user_id = id, %status, "Updating user status");

        let body = UpdateUserStatus {
            id: id.to_string(),
            status,
        };
        self.patch(
            endpoints::USERS_UPDATE_STATUS,
            &body,
            "Failed to update user status",
        )
        .await
    }
}
