//! Dashboard Service

use dash_common::{DashboardStatsResponse, RecentUsersResponse, WeeklyActivitiesResponse};

use super::endpoints;
use crate::error::ApiError;
use crate::network::ApiClient;

impl ApiClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStatsResponse, ApiError> {
        self.get(endpoints::DASHBOARD_STATS, "Failed to fetch dashboard stats")
            .await
    }

    pub async fn weekly_activities(&self) -> Result<WeeklyActivitiesResponse, ApiError> {
        self.get(
            endpoints::DASHBOARD_WEEKLY_ACTIVITIES,
            "Failed to fetch weekly activities",
        )
        .await
    }

    pub async fn recent_users(&self) -> Result<RecentUsersResponse, ApiError> {
        self.get(endpoints::DASHBOARD_RECENT_USERS, "Failed to fetch recent users")
            .await
    }
}
