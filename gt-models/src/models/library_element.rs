//! Library element models.
//!
//! A library element is a reusable dashboard asset (a shared panel or a
//! shared variable). `LibraryElement` is the full record including the
//! panel/variable `model`; `Element` is the lighter item listed by search.

use serde::{Deserialize, Serialize};

/// A user reference embedded in element metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRef {
    pub id: i64,
    pub name: String,
    pub avatar_url: String,
}

/// Author of an element's first version.
pub type CreatedBy = UserRef;

/// Author of an element's latest version.
pub type UpdatedBy = UserRef;

/// Folder linkage and audit information of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    pub folder_name: String,
    pub folder_uid: String,
    pub connected_dashboards: i64,
    /// Server timestamp, kept verbatim.
    pub created: String,
    /// Server timestamp, kept verbatim.
    pub updated: String,
    pub created_by: CreatedBy,
    pub updated_by: UpdatedBy,
}

/// Element kind as encoded by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryElementKind {
    Panel,
    Variable,
    Unknown(u64),
}

impl From<u64> for LibraryElementKind {
    fn from(kind: u64) -> Self {
        match kind {
            1 => Self::Panel,
            2 => Self::Variable,
            other => Self::Unknown(other),
        }
    }
}

impl std::fmt::Display for LibraryElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Panel => write!(f, "panel"),
            Self::Variable => write!(f, "variable"),
            Self::Unknown(kind) => write!(f, "kind {kind}"),
        }
    }
}

/// A library element with its model, from `/api/library-elements/:uid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryElement {
    pub id: u64,
    pub org_id: u64,
    pub folder_id: i64,
    pub uid: String,
    pub name: String,
    pub kind: u64,
    #[serde(rename = "type")]
    pub element_type: String,
    pub description: String,
    /// Panel or variable JSON, left undecoded.
    pub model: serde_json::Value,
    pub version: u64,
    pub meta: Meta,
}

impl LibraryElement {
    pub fn kind(&self) -> LibraryElementKind {
        self.kind.into()
    }
}

/// A library element as listed by search; carries no model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Element {
    pub id: u64,
    pub org_id: u64,
    pub folder_id: i64,
    pub uid: String,
    pub name: String,
    pub kind: u64,
    #[serde(rename = "type")]
    pub element_type: String,
    pub description: String,
    pub version: u64,
    pub meta: Meta,
}

impl Element {
    pub fn kind(&self) -> LibraryElementKind {
        self.kind.into()
    }
}

/// The paged `result` envelope of a library element search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementSearchResult {
    pub total_count: u64,
    pub page: u64,
    pub per_page: u64,
    pub elements: Vec<Element>,
}

/// Body of `GET /api/library-elements`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundLibraryElement {
    pub result: ElementSearchResult,
}
