//! Dashboard Types

use serde::{Deserialize, Serialize};

use crate::types::{Envelope, Timestamps};
use crate::{Record, Searchable, Validate};

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub users: u64,
    pub matches: u64,
    #[serde(rename = "supportTicket")]
    pub support_tickets: u64,
    pub verification: u64,
}

impl Validate for DashboardStats {}

/// One point of the weekly activity series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyActivity {
    /// Day label (e.g. "Mon").
    pub name: String,
    pub users: u64,
    pub matches: u64,
}

impl Validate for WeeklyActivity {}

/// A recent signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Record for RecentUser {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for RecentUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.full_name, &self.email]
    }
}

impl Validate for RecentUser {
    fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("recent user has an empty id".into());
        }
        Ok(())
    }
}

pub type DashboardStatsResponse = Envelope<DashboardStats>;
pub type WeeklyActivitiesResponse = Envelope<Vec<WeeklyActivity>>;
pub type RecentUsersResponse = Envelope<Vec<RecentUser>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_stats_use_backend_field_names() {
        let body = br#"{"message":"ok","data":{"users":24521,"matches":8234,"supportTicket":127,"verification":12}}"#;
        let stats = parse::<DashboardStatsResponse>("dashboard-stats", body).unwrap().data;
        assert_eq!(stats.users, 24521);
        assert_eq!(stats.support_tickets, 127);
    }

    #[test]
    fn test_negative_counter_is_rejected() {
        let body = br#"{"message":"ok","data":{"users":-1,"matches":0,"supportTicket":0,"verification":0}}"#;
        assert!(parse::<DashboardStatsResponse>("dashboard-stats", body).is_err());
    }

    #[test]
    fn test_recent_user_accepts_mongo_id() {
        let body = br#"{"message":"ok","data":[{"_id":"r1","full_name":"Sarah Johnson","email":"sarah@email.com","createdAt":"2024-01-15T10:00:00Z"}]}"#;
        let users = parse::<RecentUsersResponse>("recent-users", body).unwrap().data;
        assert_eq!(users[0].id(), "r1");
    }
}
