//! User models.
//!
//! Covers the user record returned by `/api/users` and `/api/user`, the
//! admin mutation payloads, and the paging envelope of `/api/users/search`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Grafana user.
///
/// Also used as the request body of `POST /api/admin/users`, where
/// `password` is required and `id` is ignored by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub name: String,
    pub email: String,
    pub org_id: u64,
    pub theme: String,

    /// Write-only. Never returned by the server.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,

    pub is_disabled: bool,
    pub is_grafana_admin: bool,
    pub is_external: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub auth_labels: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// A new-user payload for `POST /api/admin/users`.
    pub fn new_account(login: &str, email: &str, name: &str, password: &str) -> Self {
        Self {
            login: login.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            ..Self::default()
        }
    }
}

/// Payload of `PUT /api/admin/users/:id/permissions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub is_grafana_admin: bool,
}

/// Payload of `PUT /api/admin/users/:id/password`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPassword {
    pub password: String,
}

/// Organization membership of a user, from `/api/users/:id/orgs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserOrg {
    pub org_id: u64,
    pub name: String,
    pub role: String,
}

/// One page of `/api/users/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageUsers {
    pub total_count: u64,
    pub users: Vec<User>,
    pub page: u64,
    pub per_page: u64,
}

/// Payload of `PUT /api/users/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfileDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_grafana_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_external: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_server_payload() {
        let json = r#"{
            "id": 9007199254740993,
            "email": "admin@localhost",
            "name": "Admin",
            "login": "admin",
            "theme": "dark",
            "orgId": 1,
            "isGrafanaAdmin": true,
            "isDisabled": false,
            "isExternal": false,
            "authLabels": ["OAuth"],
            "updatedAt": "2023-05-02T10:11:12Z",
            "createdAt": "2023-05-01T09:00:00Z",
            "avatarUrl": "/avatar/46d229b033af06a191ff2267bca9ae56"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        // Above 2^53: must not pass through a float.
        assert_eq!(user.id, 9_007_199_254_740_993);
        assert!(user.is_grafana_admin);
        assert_eq!(user.auth_labels, vec!["OAuth".to_string()]);
        assert!(user.password.is_empty());
        assert_eq!(
            user.created_at.unwrap().to_rfc3339(),
            "2023-05-01T09:00:00+00:00"
        );
    }

    #[test]
    fn test_new_account_serializes_password_and_skips_empty_fields() {
        let user = User::new_account("jane", "jane@example.com", "Jane Doe", "s3cret");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["login"], "jane");
        assert_eq!(json["password"], "s3cret");
        assert!(json.get("authLabels").is_none());
        assert!(json.get("createdAt").is_none());
        assert!(json.get("avatarUrl").is_none());
    }

    #[test]
    fn test_profile_dto_only_sends_present_fields() {
        let dto = UserProfileDto {
            name: Some("Jane".into()),
            is_disabled: Some(true),
            ..UserProfileDto::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Jane", "isDisabled": true }));
    }

    #[test]
    fn test_page_users_defaults_missing_fields() {
        let page: PageUsers = serde_json::from_str(r#"{"totalCount":2}"#).unwrap();
        assert_eq!(page.total_count, 2);
        assert!(page.users.is_empty());
    }
}
