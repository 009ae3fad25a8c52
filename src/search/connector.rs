//! The search connector
//!
//! Stateless adapter between the UI-level search request and the store's
//! `_search` API: build the query body, run the round trip, reshape the
//! response. Failures propagate to the caller; there is no retry and no
//! partial-result fallback.

use super::dsl;
use crate::error::SearchError;
use crate::index::IndexConfig;
use crate::network::{StoreClient, StoreResponse};
use crate::query::SearchRequest;
use crate::results::{normalize_total, Document, FacetBucket, RawField, SearchResponse};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// A fully-built store query, ready to execute
#[derive(Debug, Clone, PartialEq)]
pub struct StoreQuery {
    /// Target index
    pub index: String,
    /// JSON body for the `_search` endpoint
    pub body: Value,
}

/// Stateless request/response adapter for the document store
#[derive(Clone)]
pub struct SearchConnector {
    client: StoreClient,
}

impl SearchConnector {
    /// Create a connector over an already-constructed client
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Build the store query for a request against one index
    pub fn build_query(&self, request: &SearchRequest, config: &IndexConfig) -> StoreQuery {
        let mut body = Map::new();
        body.insert("query".to_string(), dsl::query_clause(request, config));
        body.insert("from".to_string(), json!(request.offset()));
        body.insert("size".to_string(), json!(request.page_size));

        if let Some(aggs) = dsl::aggregations(config) {
            body.insert("aggs".to_string(), aggs);
        }
        if let Some(sort) = dsl::sort_clauses(&request.sort) {
            body.insert("sort".to_string(), sort);
        }

        StoreQuery {
            index: config.name.clone(),
            body: Value::Object(body),
        }
    }

    /// Execute a built query against the store
    ///
    /// Issued as POST for body-size reasons; semantically a read.
    pub async fn execute(&self, query: &StoreQuery) -> Result<StoreResponse, SearchError> {
        debug!("querying index {}", query.index);

        let response = self
            .client
            .post_json(&format!("{}/_search", query.index), &query.body)
            .await?;

        if !response.is_success() {
            return Err(SearchError::Status {
                status: response.status,
                body: response.text,
            });
        }

        Ok(response)
    }

    /// Reshape a raw store response into the UI response
    pub fn format_response(&self, response: &StoreResponse) -> Result<SearchResponse, SearchError> {
        let body: Value = response.json()?;

        let hits = body.get("hits").ok_or_else(|| SearchError::missing("hits"))?;

        let total_results = hits
            .get("total")
            .and_then(normalize_total)
            .ok_or_else(|| SearchError::missing("hits.total"))?;

        let mut results = Vec::new();
        let hit_list = hits
            .get("hits")
            .and_then(|h| h.as_array())
            .ok_or_else(|| SearchError::missing("hits.hits"))?;

        for hit in hit_list {
            let id = hit
                .get("_id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| SearchError::missing("hits.hits._id"))?
                .to_string();
            let score = hit.get("_score").and_then(|v| v.as_f64());

            let mut fields = BTreeMap::new();
            if let Some(source) = hit.get("_source").and_then(|s| s.as_object()) {
                for (name, value) in source {
                    fields.insert(name.clone(), RawField::new(value.clone()));
                }
            }

            results.push(Document { id, score, fields });
        }

        let mut facets = BTreeMap::new();
        if let Some(aggregations) = body.get("aggregations").and_then(|a| a.as_object()) {
            for (field, aggregation) in aggregations {
                facets.insert(field.clone(), facet_buckets(aggregation));
            }
        }

        Ok(SearchResponse {
            results,
            total_results,
            facets,
            token: correlation_token(),
        })
    }

    /// One-shot search: build, execute, format
    pub async fn search(
        &self,
        request: &SearchRequest,
        config: &IndexConfig,
    ) -> Result<SearchResponse, SearchError> {
        let query = self.build_query(request, config);
        let response = self.execute(&query).await?;
        self.format_response(&response)
    }

    /// Match-all total for an index, used by the counts endpoint
    pub async fn count(&self, config: &IndexConfig) -> Result<u64, SearchError> {
        let query = StoreQuery {
            index: config.name.clone(),
            body: json!({ "query": { "match_all": {} }, "from": 0, "size": 0 }),
        };
        let response = self.execute(&query).await?;

        let body: Value = response.json()?;
        body.get("hits")
            .and_then(|h| h.get("total"))
            .and_then(normalize_total)
            .ok_or_else(|| SearchError::missing("hits.total"))
    }
}

/// Convert one aggregation into facet buckets
fn facet_buckets(aggregation: &Value) -> Vec<FacetBucket> {
    aggregation
        .get("buckets")
        .and_then(|b| b.as_array())
        .map(|buckets| {
            buckets
                .iter()
                .filter_map(|bucket| {
                    Some(FacetBucket {
                        value: bucket.get("key")?.clone(),
                        count: bucket.get("doc_count").and_then(|c| c.as_u64())?,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Opaque token for UI request/response matching; not replay protection
fn correlation_token() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
