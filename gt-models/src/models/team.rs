//! Team models.

use serde::{Deserialize, Serialize};

/// A team, as listed by `/api/teams/search` and `/api/users/:id/teams`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: u64,
    pub org_id: u64,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub member_count: u64,
    pub permission: i64,
}

/// One page of `/api/teams/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageTeams {
    pub total_count: u64,
    pub teams: Vec<Team>,
    pub page: u64,
    pub per_page: u64,
}
