//! Response type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Envelope the UI layer expects around every field value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawField {
    pub raw: serde_json::Value,
}

impl RawField {
    pub fn new(value: serde_json::Value) -> Self {
        Self { raw: value }
    }
}

/// A single result document returned by the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Store identifier of the document
    pub id: String,
    /// Relevance score; absent when the store sorts by field instead
    pub score: Option<f64>,
    /// Source fields, each wrapped in the raw envelope
    pub fields: BTreeMap<String, RawField>,
}

/// One facet bucket: a value and how many documents carry it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetBucket {
    pub value: serde_json::Value,
    pub count: u64,
}

/// Normalized response handed to the UI layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    /// Result documents in store order
    pub results: Vec<Document>,
    /// Total number of matching documents
    pub total_results: u64,
    /// Facet summaries keyed by field
    pub facets: BTreeMap<String, Vec<FacetBucket>>,
    /// Correlation token for UI request/response matching
    pub token: String,
}

/// Normalize the store's total-hit count
///
/// Older stores return a bare integer, newer ones `{value: int, relation}`.
pub fn normalize_total(total: &serde_json::Value) -> Option<u64> {
    total
        .as_u64()
        .or_else(|| total.get("value").and_then(|v| v.as_u64()))
}
