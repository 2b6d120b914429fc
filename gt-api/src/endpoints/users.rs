//! User endpoints (`/api/user`, `/api/users`).

use gt_core::constants::paging;
use gt_core::error::GtResult;
use gt_models::{PageUsers, StatusMessage, Team, User, UserOrg, UserProfileDto};

use crate::client::ApiClient;
use crate::path::ApiPath;
use crate::query::QueryParams;

/// Optional filters of `GET /api/users/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
    /// Matched against login, email and name.
    pub query: Option<String>,
    pub perpage: Option<u32>,
    pub page: Option<u32>,
}

impl UserSearch {
    /// Query parameters sent for this search.
    ///
    /// `perpage` and `page` only go out as a pair; `query` goes out whenever set.
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(query) = &self.query {
            params.set("query", query);
        }
        if let (Some(perpage), Some(page)) = (self.perpage, self.page) {
            params.set("perpage", perpage);
            params.set("page", page);
        }
        params
    }
}

impl ApiClient {
    /// Get the signed-in user.
    /// Reflects GET /api/user.
    pub async fn get_actual_user(&self) -> GtResult<User> {
        self.get_json("/api/user", QueryParams::new()).await
    }

    /// Get a user by ID.
    /// Reflects GET /api/users/:id.
    pub async fn get_user(&self, id: u64) -> GtResult<User> {
        let path = ApiPath::new("api/users").segment(id);
        self.get_json(path.as_str(), QueryParams::new()).await
    }

    /// Get all users in one page.
    /// Reflects GET /api/users?perpage=99999.
    pub async fn get_all_users(&self) -> GtResult<Vec<User>> {
        let query = QueryParams::new().with("perpage", paging::ALL_USERS_PER_PAGE);
        self.get_json("/api/users", query).await
    }

    /// Search users with paging.
    /// Reflects GET /api/users/search.
    pub async fn search_users_with_paging(
        &self,
        query: Option<&str>,
        perpage: Option<u32>,
        page: Option<u32>,
    ) -> GtResult<PageUsers> {
        let search = UserSearch {
            query: query.map(str::to_string),
            perpage,
            page,
        };
        self.get_json("/api/users/search", search.to_query()).await
    }

    /// Switch the signed-in user's context to an organization.
    /// Reflects POST /api/user/using/:orgId.
    pub async fn switch_actual_user_context(&self, org_id: u64) -> GtResult<StatusMessage> {
        let path = ApiPath::new("api/user/using").segment(org_id);
        self.post_json::<(), _>(path.as_str(), None).await
    }

    /// Get the organizations a user belongs to.
    /// Reflects GET /api/users/:id/orgs.
    pub async fn get_user_orgs(&self, id: u64) -> GtResult<Vec<UserOrg>> {
        let path = ApiPath::new("api/users").segment(id).segment("orgs");
        self.get_json(path.as_str(), QueryParams::new()).await
    }

    /// Get the teams a user belongs to.
    /// Reflects GET /api/users/:id/teams.
    pub async fn get_user_teams(&self, id: u64) -> GtResult<Vec<Team>> {
        let path = ApiPath::new("api/users").segment(id).segment("teams");
        self.get_json(path.as_str(), QueryParams::new()).await
    }

    /// Update a user's profile.
    /// Reflects PUT /api/users/:id.
    pub async fn update_user(&self, profile: &UserProfileDto, id: u64) -> GtResult<StatusMessage> {
        let path = ApiPath::new("api/users").segment(id);
        self.put_json(path.as_str(), profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_without_filters_sends_nothing() {
        assert!(UserSearch::default().to_query().is_empty());
    }

    #[test]
    fn test_search_with_all_filters() {
        let search = UserSearch {
            query: Some("jane".into()),
            perpage: Some(10),
            page: Some(2),
        };
        let q = search.to_query();
        assert_eq!(q.len(), 3);
        assert_eq!(q.get("query"), Some("jane"));
        assert_eq!(q.get("perpage"), Some("10"));
        assert_eq!(q.get("page"), Some("2"));
    }

    #[test]
    fn test_paging_needs_both_values() {
        let only_page = UserSearch {
            page: Some(3),
            ..UserSearch::default()
        };
        assert!(only_page.to_query().is_empty());

        let only_perpage = UserSearch {
            query: Some("ops".into()),
            perpage: Some(50),
            ..UserSearch::default()
        };
        let q = only_perpage.to_query();
        assert_eq!(q.iter().collect::<Vec<_>>(), vec![("query", "ops")]);
    }
}
