//! Grafana admin API - typed client for the Grafana HTTP administration API.
//!
//! Covers users, teams, server-admin user management and library elements.
//! Every operation follows the same contract: serialize the request body
//! (if any), send exactly one request through the configured `Transport`,
//! reject any status other than 200 with the raw body attached, and decode
//! the 200 body into the declared type.

pub mod client;
pub mod endpoints;
pub mod path;
pub mod query;
pub mod response;
pub mod transport;

// Re-export key types
pub use client::ApiClient;
pub use endpoints::UserSearch;
pub use path::ApiPath;
pub use query::QueryParams;
pub use response::RawResponse;
pub use transport::{ReqwestTransport, Transport, TransportRequest};

pub use reqwest::Method;
pub use tokio_util::sync::CancellationToken;
