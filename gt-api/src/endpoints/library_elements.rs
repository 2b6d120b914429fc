//! Library element endpoints (`/api/library-elements`).
//!
//! Elements can be fetched typed or as the verbatim response body. The raw
//! form is what export/import round-trips use, so fields this crate does
//! not model survive untouched.

use bytes::Bytes;
use serde::de::IgnoredAny;

use gt_core::constants::paging;
use gt_core::error::GtResult;
use gt_models::{FoundLibraryElement, LibraryElement};

use crate::client::ApiClient;
use crate::path::ApiPath;
use crate::query::QueryParams;
use crate::response::decode;

fn by_uid(uid: &str) -> ApiPath {
    ApiPath::new("api/library-elements").segment(uid)
}

fn by_name(name: &str) -> ApiPath {
    ApiPath::new("api/library-elements/name").segment(name)
}

impl ApiClient {
    /// List library elements (first 1000).
    /// Reflects GET /api/library-elements?perpage=1000.
    pub async fn search_library_elements(&self) -> GtResult<FoundLibraryElement> {
        let query = QueryParams::new().with("perpage", paging::LIBRARY_ELEMENTS_PER_PAGE);
        self.get_json("/api/library-elements", query).await
    }

    /// Get a library element by UID.
    /// Reflects GET /api/library-elements/:uid.
    pub async fn get_library_element_by_uid(&self, uid: &str) -> GtResult<LibraryElement> {
        let raw = self.get_raw_library_element_by_uid(uid).await?;
        decode(&raw)
    }

    /// Get the verbatim body of a library element by UID.
    pub async fn get_raw_library_element_by_uid(&self, uid: &str) -> GtResult<Bytes> {
        self.get(by_uid(uid).as_str(), QueryParams::new())
            .await?
            .ensure_ok()
    }

    /// Get a library element by name.
    /// Reflects GET /api/library-elements/name/:name.
    pub async fn get_library_element_by_name(&self, name: &str) -> GtResult<LibraryElement> {
        let raw = self.get_raw_library_element_by_name(name).await?;
        decode(&raw)
    }

    /// Get the verbatim body of a library element by name.
    pub async fn get_raw_library_element_by_name(&self, name: &str) -> GtResult<Bytes> {
        self.get(by_name(name).as_str(), QueryParams::new())
            .await?
            .ensure_ok()
    }

    /// Patch a library element with a caller-supplied JSON body.
    /// Reflects PATCH /api/library-elements/:uid.
    ///
    /// Only success or failure is reported. The 200 body must still be
    /// valid JSON; its content is discarded.
    pub async fn update_raw_library_element_by_uid(
        &self,
        uid: &str,
        raw_element: Vec<u8>,
    ) -> GtResult<()> {
        let body = self
            .patch(by_uid(uid).as_str(), Some(raw_element))
            .await?
            .ensure_ok()?;
        decode::<IgnoredAny>(&body).map(|_| ())
    }
}
