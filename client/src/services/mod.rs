//! Resource Services
//!
//! One method per admin endpoint, grouped by resource family. Each returns the
//! parsed envelope or an [`ApiError`](crate::error::ApiError); nothing is
//! retried or cached.

pub mod auth;
pub mod dashboard;
pub mod matches;
pub mod users;
pub mod verification;

/// Endpoint paths, relative to the configured base URL.
pub mod endpoints {
    pub const AUTH_LOGIN: &str = "/admin/login";
    pub const AUTH_VALIDATE: &str = "/admin/validate";

    pub const DASHBOARD_STATS: &str = "/admin/dashboard-stats";
    pub const DASHBOARD_WEEKLY_ACTIVITIES: &str = "/admin/weekly-activities";
    pub const DASHBOARD_RECENT_USERS: &str = "/admin/recent-users";

    pub const USERS_GET_ALL: &str = "/admin/get-all-users";
    pub const USERS_UPDATE_STATUS: &str = "/admin/update-user-status";

    pub const MATCHES_GET_ALL: &str = "/admin/get-all-matches";

    pub const VERIFICATION_GET_ALL_PENDING: &str = "/admin/get-all-pending-verification";
}
