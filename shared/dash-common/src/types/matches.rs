//! Match Types

use serde::{Deserialize, Serialize};

use crate::types::{Envelope, Timestamps};
use crate::{Record, Searchable, Validate};

/// A mutual match between two users. Read-only from the admin side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name1: String,
    #[serde(default)]
    pub avatar1: Option<String>,
    pub full_name2: String,
    #[serde(default)]
    pub avatar2: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Matches carry no status field; every record the backend lists is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Matched,
}

impl Match {
    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        MatchStatus::Matched
    }
}

impl Record for Match {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Match {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.full_name1, &self.full_name2]
    }
}

impl Validate for Match {
    fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("match has an empty id".into());
        }
        Ok(())
    }
}

pub type MatchesResponse = Envelope<Vec<Match>>;
