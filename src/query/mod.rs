//! Search request model
//!
//! Defines the UI-level request shape: an optional free-text term, faceted
//! filters, pagination, and sort. Filters are tagged per kind so the query
//! builder never has to sniff for a `from` key at runtime.

use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How multiple exact values for the same field combine
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// At least one of the values must match
    #[default]
    Any,
    /// Every value must match
    All,
}

/// A single filter entry for a field
///
/// Only two shapes exist: term equality and an inclusive numeric range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Filter {
    /// Term-equality filter
    Exact {
        #[serde(default)]
        match_kind: MatchKind,
        value: serde_json::Value,
    },
    /// Inclusive numeric range; an absent bound stays absent
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<f64>,
    },
}

impl Filter {
    /// Exact-match filter accepting any of the given value (shorthand)
    pub fn exact(value: impl Into<serde_json::Value>) -> Self {
        Self::Exact {
            match_kind: MatchKind::Any,
            value: value.into(),
        }
    }

    /// Range filter over the given bounds
    pub fn range(from: Option<f64>, to: Option<f64>) -> Self {
        Self::Range { from, to }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Wire name the store expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A single sort clause; clauses apply in the order given
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortClause {
    pub field: String,
    pub direction: Direction,
}

impl SortClause {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// A UI-level search request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchRequest {
    /// Free-text search term; absent means match everything
    pub term: Option<String>,
    /// Filters keyed by document field
    pub filters: BTreeMap<String, Vec<Filter>>,
    /// Page number, 1-based
    pub page: u32,
    /// Results per page
    pub page_size: u32,
    /// Sort specification; empty leaves relevance ordering
    pub sort: Vec<SortClause>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            term: None,
            filters: BTreeMap::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl SearchRequest {
    /// Create a request for a free-text term
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Default::default()
        }
    }

    /// Create a match-everything request
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Set the page number, clamped to a minimum of 1
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the page size, clamped to 1..=MAX_PAGE_SIZE
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Add a filter for a field
    pub fn with_filter(mut self, field: impl Into<String>, filter: Filter) -> Self {
        self.filters.entry(field.into()).or_default().push(filter);
        self
    }

    /// Add a sort clause
    pub fn with_sort(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.sort.push(SortClause::new(field, direction));
        self
    }

    /// Offset of the first result: (page - 1) * page_size
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Whether the request has a usable free-text term
    pub fn has_term(&self) -> bool {
        self.term
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = SearchRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert!(!request.has_term());
        assert!(request.sort.is_empty());
    }

    #[test]
    fn test_offset_arithmetic() {
        let request = SearchRequest::term("iris").with_page(1).with_page_size(20);
        assert_eq!(request.offset(), 0);

        let request = SearchRequest::term("iris").with_page(3).with_page_size(10);
        assert_eq!(request.offset(), 20);
    }

    #[test]
    fn test_page_clamping() {
        let request = SearchRequest::match_all().with_page(0);
        assert_eq!(request.page, 1);

        let request = SearchRequest::match_all().with_page_size(0);
        assert_eq!(request.page_size, 1);

        let request = SearchRequest::match_all().with_page_size(100_000);
        assert_eq!(request.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_blank_term_is_not_a_term() {
        let request = SearchRequest::term("   ");
        assert!(!request.has_term());
    }

    #[test]
    fn test_filter_builders() {
        let request = SearchRequest::match_all()
            .with_filter("status", Filter::exact("active"))
            .with_filter("status", Filter::exact("deactivated"))
            .with_filter(
                "qualities.NumberOfInstances",
                Filter::range(Some(100.0), None),
            );

        assert_eq!(request.filters["status"].len(), 2);
        assert_eq!(request.filters["qualities.NumberOfInstances"].len(), 1);
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: SearchRequest = serde_json::from_str(r#"{"term":"iris"}"#).unwrap();
        assert_eq!(request.term.as_deref(), Some("iris"));
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_filter_tagging() {
        let filter: Filter =
            serde_json::from_str(r#"{"kind":"range","from":100.0}"#).unwrap();
        assert_eq!(filter, Filter::range(Some(100.0), None));

        let filter: Filter =
            serde_json::from_str(r#"{"kind":"exact","value":"active"}"#).unwrap();
        assert_eq!(filter, Filter::exact("active"));
    }
}
