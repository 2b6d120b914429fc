//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "grafana-admin";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name used under the platform config and data dirs.
pub const APP_DIR_NAME: &str = "grafana-admin";

/// Base name of the rotated log file.
pub const LOG_FILE_NAME: &str = "grafana-admin.log";

/// Default API timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Header selecting the organization a request runs against.
pub const ORG_ID_HEADER: &str = "X-Grafana-Org-Id";

/// Page sizes sent by the listing endpoints.
pub mod paging {
    /// `GET /api/users` fetches everything in one page.
    pub const ALL_USERS_PER_PAGE: u32 = 99_999;

    /// `GET /api/library-elements` page size.
    pub const LIBRARY_ELEMENTS_PER_PAGE: u32 = 1_000;
}
