//! API path building.
//!
//! Identifiers interpolated into a path (UIDs, names) are percent-escaped
//! so that each one stays a single path segment, whatever characters it
//! contains.

use std::fmt::Display;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside one path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Builder for an absolute API path such as `/api/users/7/orgs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    path: String,
}

impl ApiPath {
    /// Start from a fixed, already-safe prefix like `"api/admin/users"`.
    pub fn new(prefix: &str) -> Self {
        let trimmed = prefix.trim_matches('/');
        Self {
            path: format!("/{trimmed}"),
        }
    }

    /// Append one escaped segment.
    pub fn segment(mut self, value: impl Display) -> Self {
        let raw = value.to_string();
        self.path.push('/');
        self.path.extend(utf8_percent_encode(&raw, SEGMENT));
        self
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn into_string(self) -> String {
        self.path
    }
}

impl Display for ApiPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<ApiPath> for String {
    fn from(path: ApiPath) -> Self {
        path.path
    }
}
