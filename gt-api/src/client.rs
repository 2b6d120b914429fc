//! API client for the Grafana HTTP API.
//!
//! `ApiClient` is an immutable handle: a shared transport plus an optional
//! cancellation token. It keeps no per-call state, so one client can be
//! cloned freely and used from many tasks at once. Every endpoint wrapper
//! issues exactly one request through `ApiClient::request`.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use gt_core::config::ServerConfig;
use gt_core::error::{GtError, GtResult, TransportError};

use crate::query::QueryParams;
use crate::response::RawResponse;
use crate::transport::{ReqwestTransport, Transport, TransportRequest};

/// Client for the Grafana user, team, admin and library element API.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    cancel: Option<CancellationToken>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("cancellable", &self.cancel.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client talking to the server described by `config`.
    pub fn new(config: &ServerConfig) -> GtResult<Self> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }

    /// Create a client on top of any transport.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Create a client sharing an existing transport handle.
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cancel: None,
        }
    }

    /// A copy of this client whose calls abort once `token` is cancelled.
    ///
    /// A call aborted this way fails with `TransportError::Cancelled`.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cancel: Some(token),
        }
    }

    /// Issue exactly one request and return the raw response.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: QueryParams,
        body: Option<Vec<u8>>,
    ) -> GtResult<RawResponse> {
        debug!("{} {}", method, path);

        let mut request = TransportRequest::new(method, path).with_query(query);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let send = self.transport.send(request);
        let response = match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(TransportError::Cancelled),
                    result = send => result,
                }
            }
            None => send.await,
        }?;

        debug!("{} -> {}", path, response.status);
        Ok(response)
    }

    // --- Verb helpers ---

    pub async fn get(&self, path: &str, query: QueryParams) -> GtResult<RawResponse> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post(&self, path: &str, body: Option<Vec<u8>>) -> GtResult<RawResponse> {
        self.request(Method::POST, path, QueryParams::new(), body).await
    }

    pub async fn put(&self, path: &str, body: Option<Vec<u8>>) -> GtResult<RawResponse> {
        self.request(Method::PUT, path, QueryParams::new(), body).await
    }

    pub async fn patch(&self, path: &str, body: Option<Vec<u8>>) -> GtResult<RawResponse> {
        self.request(Method::PATCH, path, QueryParams::new(), body).await
    }

    pub async fn delete(&self, path: &str) -> GtResult<RawResponse> {
        self.request(Method::DELETE, path, QueryParams::new(), None).await
    }

    // --- Typed helpers ---

    /// Serialize a request body. Runs before any network I/O.
    pub fn encode<B: Serialize + ?Sized>(body: &B) -> GtResult<Vec<u8>> {
        serde_json::to_vec(body).map_err(|e| GtError::Encoding(e.to_string()))
    }

    /// GET + status check + decode.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryParams,
    ) -> GtResult<T> {
        self.get(path, query).await?.json()
    }

    /// POST an optional JSON body + status check + decode.
    pub async fn post_json<B, T>(&self, path: &str, body: Option<&B>) -> GtResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body.map(Self::encode).transpose()?;
        self.post(path, body).await?.json()
    }

    /// PUT a JSON body + status check + decode.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> GtResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        self.put(path, Some(body)).await?.json()
    }

    /// DELETE + status check + decode.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> GtResult<T> {
        self.delete(path).await?.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use gt_models::StatusMessage;

    struct CountingTransport {
        calls: AtomicUsize,
        delay: Duration,
    }

    #[async_trait]
    impl Transport for CountingTransport {
        async fn send(&self, _request: TransportRequest) -> Result<RawResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(RawResponse::new(200, r#"{"message":"ok"}"#))
        }
    }

    fn counting(delay: Duration) -> Arc<CountingTransport> {
        Arc::new(CountingTransport {
            calls: AtomicUsize::new(0),
            delay,
        })
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    #[tokio::test]
    async fn test_encoding_failure_sends_nothing() {
        let transport = counting(Duration::ZERO);
        let client = ApiClient::from_shared(transport.clone());

        let err = client
            .post_json::<_, StatusMessage>("/api/admin/users", Some(&Unserializable))
            .await
            .unwrap_err();

        assert!(matches!(err, GtError::Encoding(ref msg) if msg.contains("refusing")));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cancelled_token_aborts_call() {
        let transport = counting(Duration::from_secs(30));
        let token = CancellationToken::new();
        let client = ApiClient::from_shared(transport.clone()).with_cancellation(token.clone());

        let call = tokio::spawn(async move { client.get("/api/user", QueryParams::new()).await });
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();

        let err = call.await.unwrap().unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_already_cancelled_token_fails_fast() {
        let transport = counting(Duration::from_secs(30));
        let token = CancellationToken::new();
        token.cancel();
        let client = ApiClient::from_shared(transport).with_cancellation(token);

        let err = client.get("/api/user", QueryParams::new()).await.unwrap_err();
        assert!(matches!(err, GtError::Transport(TransportError::Cancelled)));
    }

    #[tokio::test]
    async fn test_uncancelled_client_is_unaffected() {
        let transport = counting(Duration::ZERO);
        let base = ApiClient::from_shared(transport.clone());
        let scoped = base.with_cancellation(CancellationToken::new());

        let msg: StatusMessage = scoped.delete_json("/api/admin/users/1").await.unwrap();
        assert_eq!(msg.message_or_default(), "ok");
        let _: StatusMessage = base.delete_json("/api/admin/users/2").await.unwrap();
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
    }
}
