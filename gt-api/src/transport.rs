//! HTTP transport boundary.
//!
//! The endpoint wrappers never talk to the network directly. They hand a
//! `TransportRequest` to a `Transport` and get back a `RawResponse`. The
//! transport owns base-URL resolution, credentials, TLS and timeouts.
//! `ReqwestTransport` is the production implementation; tests plug in stubs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

use gt_core::config::{Credentials, ServerConfig};
use gt_core::constants;
use gt_core::error::{GtError, GtResult, TransportError};

use crate::query::QueryParams;
use crate::response::RawResponse;

/// One HTTP call described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    /// Absolute API path, e.g. `/api/users/7`. Segments are already escaped.
    pub path: String,
    pub query: QueryParams,
    /// JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Executes one HTTP exchange.
///
/// Implementations must not retry and must not interpret the status code;
/// any status the server sends is returned as a `RawResponse`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError>;
}

/// Transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
    base_url: Url,
    credentials: Credentials,
}

impl ReqwestTransport {
    /// Build a transport from server configuration.
    pub fn new(config: &ServerConfig) -> GtResult<Self> {
        config.validate()?;
        let base_url = config.base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(org_id) = config.org_id {
            let name = HeaderName::from_bytes(constants::ORG_ID_HEADER.as_bytes())
                .map_err(|e| GtError::Config(format!("invalid org header: {e}")))?;
            headers.insert(name, HeaderValue::from(org_id));
        }
        for (key, value) in &config.custom_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| GtError::Config(format!("invalid header name {key:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| GtError::Config(format!("invalid value for header {key:?}: {e}")))?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_secs(15));

        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| GtError::Config(format!("failed to build HTTP client: {e}")))?;

        debug!("transport ready for {base_url}");

        Ok(Self {
            inner,
            base_url,
            credentials: config.credentials(),
        })
    }

    /// Resolve an API path and query against the base URL, keeping any
    /// sub-path the base URL has (e.g. `https://host/grafana`).
    pub fn resolve_url(&self, path: &str, query: &QueryParams) -> Result<Url, TransportError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{}", path.trim_start_matches('/')))
            .map_err(|e| TransportError::Request(format!("invalid request url: {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        let url = self.resolve_url(&request.path, &request.query)?;
        let mut builder = self.inner.request(request.method, url);

        builder = match &self.credentials {
            Credentials::Anonymous => builder,
            Credentials::Bearer(token) => builder.bearer_auth(token),
            Credentials::Basic { user, password } => builder.basic_auth(user, Some(password)),
        };

        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(classify_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(classify_error)?;
        Ok(RawResponse { status, body })
    }
}

/// Classify a reqwest error into a TransportError variant.
fn classify_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::Connect(e.to_string())
    } else {
        TransportError::Request(e.to_string())
    }
}
