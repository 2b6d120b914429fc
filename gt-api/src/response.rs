//! Raw HTTP responses and the status/decode contract applied to them.
//!
//! Every endpoint goes through the same two steps: a status other than 200
//! becomes `GtError::HttpStatus` carrying the verbatim body, and a 200 body
//! that does not match the expected type becomes `GtError::Decoding`.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use gt_core::error::{GtError, GtResult};

/// Status code and body of one HTTP exchange, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the server answered 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Return the body if the status is 200, else an `HttpStatus` error.
    pub fn ensure_ok(self) -> GtResult<Bytes> {
        if self.is_ok() {
            Ok(self.body)
        } else {
            Err(GtError::http_status(self.status, &self.body))
        }
    }

    /// Check the status, then decode the body as `T`.
    pub fn json<T: DeserializeOwned>(self) -> GtResult<T> {
        let body = self.ensure_ok()?;
        decode(&body)
    }
}

/// Decode a JSON body. Integers go straight to the target field type and
/// never through a float.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> GtResult<T> {
    serde_json::from_slice(body).map_err(|e| GtError::decoding(e, body))
}
