//! HTTP request handlers

use super::state::AppState;
use crate::error::SearchError;
use crate::query::{Direction, SearchRequest, SortClause};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::future::join_all;
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Query parameters for the GET search form
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search term
    pub q: Option<String>,
    /// Page number
    pub page: Option<u32>,
    /// Results per page
    pub page_size: Option<u32>,
    /// Sort clauses, comma-separated `field:direction`
    pub sort: Option<String>,
}

impl SearchParams {
    fn into_request(self) -> SearchRequest {
        let mut request = SearchRequest {
            term: self.q,
            ..Default::default()
        }
        .with_page(self.page.unwrap_or(1))
        .with_page_size(self.page_size.unwrap_or(crate::DEFAULT_PAGE_SIZE));

        if let Some(sort) = self.sort.as_deref() {
            request.sort = parse_sort(sort);
        }
        request
    }
}

/// Parse `field:direction` pairs; a missing direction means ascending
fn parse_sort(raw: &str) -> Vec<SortClause> {
    raw.split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            let (field, direction) = match part.split_once(':') {
                Some((field, "desc")) => (field, Direction::Desc),
                Some((field, _)) => (field, Direction::Asc),
                None => (part, Direction::Asc),
            };
            Some(SortClause::new(field, direction))
        })
        .collect()
}

/// POST /api/search/{index} with a full request body
pub async fn search_post(
    State(state): State<AppState>,
    Path(index): Path<String>,
    Json(request): Json<SearchRequest>,
) -> Response {
    run_search(&state, &index, request).await
}

/// GET /api/search/{index} convenience form
pub async fn search_get(
    State(state): State<AppState>,
    Path(index): Path<String>,
    Query(params): Query<SearchParams>,
) -> Response {
    run_search(&state, &index, params.into_request()).await
}

async fn run_search(state: &AppState, index: &str, request: SearchRequest) -> Response {
    let Some(config) = state.registry.get(index) else {
        return error_response(SearchError::UnknownIndex(index.to_string()));
    };

    match state.connector.search(&request, config).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/indices
pub async fn indices(State(state): State<AppState>) -> impl IntoResponse {
    let names: Vec<String> = state.registry.names().iter().map(|s| s.to_string()).collect();
    Json(names)
}

/// Query parameters for the counts endpoint
#[derive(Debug, Deserialize)]
pub struct CountParams {
    /// Comma-separated index names; absent means all configured indices
    pub indices: Option<String>,
}

/// GET /api/counts
///
/// One match-all total per index. The round trips are independent, so they
/// run concurrently.
pub async fn counts(State(state): State<AppState>, Query(params): Query<CountParams>) -> Response {
    let names: Vec<String> = match params.indices {
        Some(ref raw) => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => state.registry.names().iter().map(|s| s.to_string()).collect(),
    };

    let mut configs = Vec::with_capacity(names.len());
    for name in &names {
        match state.registry.get(name) {
            Some(config) => configs.push(config),
            None => return error_response(SearchError::UnknownIndex(name.clone())),
        }
    }

    let futures: Vec<_> = configs
        .iter()
        .map(|config| state.connector.count(config))
        .collect();

    let mut totals = BTreeMap::new();
    for (name, result) in names.iter().zip(join_all(futures).await) {
        match result {
            Ok(count) => {
                totals.insert(name.clone(), count);
            }
            Err(err) => return error_response(err),
        }
    }

    Json(totals).into_response()
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION,
    }))
}

/// Map connector errors onto HTTP statuses
///
/// Store failure detail goes to the log; the caller gets a generic body and
/// decides its own fallback presentation.
fn error_response(err: SearchError) -> Response {
    match err {
        SearchError::UnknownIndex(name) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown index: {name}") })),
        )
            .into_response(),
        err => {
            tracing::warn!("search failed: {err}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "search failed" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        let sort = parse_sort("runs:desc, name:asc,date");
        assert_eq!(sort.len(), 3);
        assert_eq!(sort[0], SortClause::new("runs", Direction::Desc));
        assert_eq!(sort[1], SortClause::new("name", Direction::Asc));
        assert_eq!(sort[2], SortClause::new("date", Direction::Asc));

        assert!(parse_sort("").is_empty());
    }

    #[test]
    fn test_search_params_defaults() {
        let params = SearchParams {
            q: Some("iris".to_string()),
            page: None,
            page_size: None,
            sort: None,
        };
        let request = params.into_request();
        assert_eq!(request.term.as_deref(), Some("iris"));
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, crate::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_error_response_statuses() {
        let response = error_response(SearchError::UnknownIndex("users".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = error_response(SearchError::Status {
            status: 503,
            body: "unavailable".to_string(),
        });
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
