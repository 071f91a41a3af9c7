//! Matches Service

use dash_common::MatchesResponse;

use super::endpoints;
use crate::error::ApiError;
use crate::network::ApiClient;

impl ApiClient {
    pub async fn list_matches(&self) -> Result<MatchesResponse, ApiError> {
        self.get(endpoints::MATCHES_GET_ALL, "Failed to fetch matches")
            .await
    }
}
