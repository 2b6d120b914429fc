//! Grafana admin models - records mirroring the server's JSON payloads.
//!
//! Every type here is a plain value snapshot of server state at fetch time.
//! Field names follow the server's camelCase wire format; fields the server
//! leaves out decode to their defaults.

pub mod models;

// Re-export key types
pub use models::auth_token::{RevokeAuthTokenCmd, UserToken};
pub use models::library_element::{
    CreatedBy, Element, ElementSearchResult, FoundLibraryElement, LibraryElement,
    LibraryElementKind, Meta, UpdatedBy, UserRef,
};
pub use models::status::StatusMessage;
pub use models::team::{PageTeams, Team};
pub use models::user::{PageUsers, User, UserOrg, UserPassword, UserPermissions, UserProfileDto};
