use serde::Deserialize;

use super::models::Author;

// ESearch API response structures

/// The outer object is parsed loosely so a missing `esearchresult` or
/// `idlist` can be reported as a shape mismatch instead of a JSON error.
#[derive(Debug, Deserialize)]
pub(crate) struct ESearchResult {
    #[serde(default)]
    pub esearchresult: Option<ESearchData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ESearchData {
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
    #[serde(default)]
    pub count: Option<String>,
    #[serde(default)]
    pub idlist: Option<Vec<String>>,
}

// ESummary API response structures

/// ESummary keys each document by its UID, so `result` stays a raw value
/// and documents are looked up by identifier.
#[derive(Debug, Deserialize)]
pub(crate) struct ESummaryResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ESummaryContactInfo {
    #[serde(default)]
    pub email: Option<String>,
}

/// Only the fields this crate maps. Every field is optional; a field that is
/// present with the wrong JSON type fails deserialization.
#[derive(Debug, Deserialize)]
pub(crate) struct ESummaryDocSum {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pubdate: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<Author>>,
    #[serde(default)]
    pub contactinfo: Option<ESummaryContactInfo>,
}
