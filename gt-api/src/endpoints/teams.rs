//! Team endpoints.

use gt_core::error::GtResult;
use gt_models::PageTeams;

use crate::client::ApiClient;
use crate::query::QueryParams;

impl ApiClient {
    /// Search teams by exact name.
    /// Reflects GET /api/teams/search?name=.
    pub async fn search_team_with_name(&self, name: &str) -> GtResult<PageTeams> {
        let query = QueryParams::new().with("name", name);
        self.get_json("/api/teams/search", query).await
    }
}
