//! User auth token models (`/api/admin/users/:id/auth-tokens`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An active login session of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserToken {
    pub id: i64,
    pub is_active: bool,
    pub client_ip: String,
    pub browser: String,
    pub browser_version: String,
    pub os: String,
    pub os_version: String,
    pub device: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen_at: Option<DateTime<Utc>>,
}

/// Payload of `POST /api/admin/users/:id/revoke-auth-token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeAuthTokenCmd {
    pub auth_token_id: i64,
}
