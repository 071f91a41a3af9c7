//! User Types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Envelope, MutationEnvelope, Timestamps};
use crate::{Record, Searchable, Validate};

/// Moderation status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Banned,
    Blocked,
    /// Accounts are never removed client-side; deletion is a status.
    Deleted,
}

impl UserStatus {
    pub const ALL: [Self; 5] = [
        Self::Active,
        Self::Inactive,
        Self::Banned,
        Self::Blocked,
        Self::Deleted,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Banned => "banned",
            Self::Blocked => "blocked",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for UserStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Billing plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Subscribed,
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("free"),
            Self::Subscribed => f.write_str("subscribed"),
        }
    }
}

/// Account role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    SuperAdmin,
    Admin,
    Staff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestedIn {
    Male,
    Female,
    Both,
    Others,
}

/// Match preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "ageRange")]
    pub age_range: (u32, u32),
    #[serde(rename = "maxDistance")]
    pub max_distance: u32,
}

/// Billing provider subscription state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    PastDue,
    Unpaid,
    Incomplete,
    None,
}

impl SubscriptionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Canceled => "canceled",
            Self::PastDue => "past_due",
            Self::Unpaid => "unpaid",
            Self::Incomplete => "incomplete",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "planId", default)]
    pub plan_id: String,
    pub status: SubscriptionStatus,
    #[serde(rename = "currentPeriodEnd", default)]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(rename = "cancelAtPeriodEnd", default)]
    pub cancel_at_period_end: bool,
}

/// A dating-app user as the admin endpoints return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub interested_in: Option<InterestedIn>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
    #[serde(default)]
    pub role: Role,
    pub status: UserStatus,
    #[serde(default)]
    pub plan: Plan,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub is_phone_number_verified: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(default)]
    pub profile_completed: bool,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl User {
    /// Minimal user with every optional field empty.
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        status: UserStatus,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            phone_number: None,
            avatar: None,
            bio: None,
            education: None,
            photos: Vec::new(),
            hobbies: Vec::new(),
            gender: None,
            interested_in: None,
            preferences: None,
            role: Role::User,
            status,
            plan: Plan::Free,
            is_email_verified: false,
            is_phone_number_verified: false,
            is_premium: false,
            is_verified: false,
            profile_completed: false,
            subscription: None,
            last_active: None,
            timestamps: Timestamps::default(),
        }
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.full_name, &self.email]
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err(format!("user '{}' has an empty id", self.email));
        }
        Ok(())
    }
}

/// Body of the status update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserStatus {
    pub id: String,
    pub status: UserStatus,
}

pub type UsersResponse = Envelope<Vec<User>>;
pub type UpdateUserStatusResponse = MutationEnvelope<User>;
