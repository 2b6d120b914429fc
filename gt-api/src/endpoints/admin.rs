//! Admin endpoints (`/api/admin/users`) and cross-user context switching.
//!
//! All of these require a Grafana server admin.

use tracing::trace;

use gt_core::error::GtResult;
use gt_models::{RevokeAuthTokenCmd, StatusMessage, User, UserPassword, UserPermissions, UserToken};

use crate::client::ApiClient;
use crate::path::ApiPath;
use crate::query::QueryParams;
use crate::response::decode;

fn admin_user(id: u64) -> ApiPath {
    ApiPath::new("api/admin/users").segment(id)
}

impl ApiClient {
    /// Create a new global user.
    /// Reflects POST /api/admin/users.
    pub async fn create_user(&self, user: &User) -> GtResult<StatusMessage> {
        self.post_json("/api/admin/users", Some(user)).await
    }

    /// Delete a global user.
    /// Reflects DELETE /api/admin/users/:id.
    pub async fn delete_user(&self, id: u64) -> GtResult<StatusMessage> {
        self.delete_json(admin_user(id).as_str()).await
    }

    /// Disable a user.
    /// Reflects POST /api/admin/users/:id/disable.
    pub async fn disable_user(&self, id: u64) -> GtResult<StatusMessage> {
        let path = admin_user(id).segment("disable");
        self.post_json::<(), _>(path.as_str(), None).await
    }

    /// Enable a user.
    /// Reflects POST /api/admin/users/:id/enable.
    pub async fn enable_user(&self, id: u64) -> GtResult<StatusMessage> {
        let path = admin_user(id).segment("enable");
        self.post_json::<(), _>(path.as_str(), None).await
    }

    /// Grant or revoke server admin.
    /// Reflects PUT /api/admin/users/:id/permissions.
    pub async fn update_user_permissions(
        &self,
        permissions: UserPermissions,
        id: u64,
    ) -> GtResult<StatusMessage> {
        let path = admin_user(id).segment("permissions");
        self.put_json(path.as_str(), &permissions).await
    }

    /// Switch another user's context to an organization.
    /// Reflects POST /api/users/:id/using/:orgId.
    pub async fn switch_user_context(&self, id: u64, org_id: u64) -> GtResult<StatusMessage> {
        let path = ApiPath::new("api/users").segment(id).segment("using").segment(org_id);
        self.post_json::<(), _>(path.as_str(), None).await
    }

    /// Set a user's password.
    /// Reflects PUT /api/admin/users/:id/password.
    pub async fn update_user_password(
        &self,
        password: &UserPassword,
        id: u64,
    ) -> GtResult<StatusMessage> {
        let path = admin_user(id).segment("password");
        self.put_json(path.as_str(), password).await
    }

    /// List a user's login sessions.
    /// Reflects GET /api/admin/users/:id/auth-tokens.
    ///
    /// The raw body is emitted at `trace` level on the `gt_api::auth_tokens` target.
    pub async fn get_user_auth_tokens(&self, id: u64) -> GtResult<Vec<UserToken>> {
        let path = admin_user(id).segment("auth-tokens");
        let body = self.get(path.as_str(), QueryParams::new()).await?.ensure_ok()?;
        trace!(
            target: "gt_api::auth_tokens",
            user_id = id,
            "auth-tokens: {}",
            String::from_utf8_lossy(&body)
        );
        decode(&body)
    }

    /// Revoke one login session of a user.
    /// Reflects POST /api/admin/users/:id/revoke-auth-token.
    pub async fn revoke_auth_token(&self, id: u64, auth_token_id: i64) -> GtResult<StatusMessage> {
        let path = admin_user(id).segment("revoke-auth-token");
        let cmd = RevokeAuthTokenCmd { auth_token_id };
        self.post_json(path.as_str(), Some(&cmd)).await
    }
}
