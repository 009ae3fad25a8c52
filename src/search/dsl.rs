//! Store query DSL construction
//!
//! Builds the JSON bodies the store's `_search` endpoint accepts. The store
//! rejects unknown keys, so display-only metadata (range bucket names) never
//! enters the output.

use crate::index::{FacetDef, IndexConfig};
use crate::query::{Filter, MatchKind, SearchRequest, SortClause};
use serde_json::{json, Map, Value};

/// Build the boolean query clause for a request
pub(super) fn query_clause(request: &SearchRequest, config: &IndexConfig) -> Value {
    let mut must: Vec<Value> = Vec::new();

    if request.has_term() {
        must.push(json!({
            "multi_match": {
                "query": request.term.as_deref().unwrap_or_default(),
                "fields": config.boosted_fields(),
            }
        }));
    } else {
        must.push(json!({ "match_all": {} }));
    }

    for (field, filters) in &request.filters {
        let mut alternatives: Vec<Value> = Vec::new();

        for filter in filters {
            match filter {
                Filter::Exact {
                    match_kind: MatchKind::Any,
                    value,
                } => alternatives.push(term_clause(field, value)),
                Filter::Exact {
                    match_kind: MatchKind::All,
                    value,
                } => must.push(term_clause(field, value)),
                Filter::Range { from, to } => must.push(range_clause(field, *from, *to)),
            }
        }

        // A single alternative needs no bool wrapper
        match alternatives.len() {
            0 => {}
            1 => must.push(alternatives.remove(0)),
            _ => must.push(json!({
                "bool": {
                    "should": alternatives,
                    "minimum_should_match": 1,
                }
            })),
        }
    }

    json!({ "bool": { "must": must } })
}

fn term_clause(field: &str, value: &Value) -> Value {
    json!({ "term": { field: value } })
}

/// Inclusive range clause; an absent bound omits its key entirely
fn range_clause(field: &str, from: Option<f64>, to: Option<f64>) -> Value {
    let mut bounds = Map::new();
    if let Some(from) = from {
        bounds.insert("gte".to_string(), json!(from));
    }
    if let Some(to) = to {
        bounds.insert("lte".to_string(), json!(to));
    }
    json!({ "range": { field: bounds } })
}

/// Aggregation requests for every configured facet, or None when the index
/// defines no facets
pub(super) fn aggregations(config: &IndexConfig) -> Option<Value> {
    if config.facets.is_empty() {
        return None;
    }

    let mut aggs = Map::new();
    for facet in &config.facets {
        let agg = match facet {
            FacetDef::Value { field, size } => json!({
                "terms": { "field": field, "size": size }
            }),
            FacetDef::Range { field, buckets } => {
                let ranges: Vec<Value> = buckets
                    .iter()
                    .map(|bucket| {
                        let mut range = Map::new();
                        if let Some(from) = bucket.from {
                            range.insert("from".to_string(), json!(from));
                        }
                        if let Some(to) = bucket.to {
                            range.insert("to".to_string(), json!(to));
                        }
                        Value::Object(range)
                    })
                    .collect();
                json!({ "range": { "field": field, "ranges": ranges } })
            }
        };
        aggs.insert(facet.field().to_string(), agg);
    }

    Some(Value::Object(aggs))
}

/// Sort clauses in request order, or None to leave relevance ordering
pub(super) fn sort_clauses(sort: &[SortClause]) -> Option<Value> {
    if sort.is_empty() {
        return None;
    }

    let clauses: Vec<Value> = sort
        .iter()
        .map(|clause| json!({ clause.field.as_str(): { "order": clause.direction.as_str() } }))
        .collect();

    Some(Value::Array(clauses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{RangeBucket, SearchField};
    use crate::query::Direction;

    fn test_config() -> IndexConfig {
        IndexConfig {
            name: "data".to_string(),
            search_fields: vec![
                SearchField::weighted("name", 3),
                SearchField::new("description"),
            ],
            facets: vec![
                FacetDef::value("status"),
                FacetDef::range(
                    "qualities.NumberOfInstances",
                    vec![
                        RangeBucket::new("small", None, Some(1_000.0)),
                        RangeBucket::new("large", Some(1_000.0), None),
                    ],
                ),
            ],
        }
    }

    #[test]
    fn test_no_term_is_match_all() {
        let clause = query_clause(&SearchRequest::match_all(), &test_config());
        assert_eq!(clause["bool"]["must"][0], json!({ "match_all": {} }));
    }

    #[test]
    fn test_term_builds_weighted_multi_match() {
        let config = test_config();
        let clause = query_clause(&SearchRequest::term("iris"), &config);

        let fields = clause["bool"]["must"][0]["multi_match"]["fields"]
            .as_array()
            .unwrap();
        assert_eq!(fields.len(), config.search_fields.len());
        assert_eq!(fields[0], "name^3");
        assert_eq!(fields[1], "description^1");
    }

    #[test]
    fn test_exact_filters_any_group_under_should() {
        let request = SearchRequest::match_all()
            .with_filter("status", Filter::exact("active"))
            .with_filter("status", Filter::exact("deactivated"));
        let clause = query_clause(&request, &test_config());

        let should = clause["bool"]["must"][1]["bool"]["should"].as_array().unwrap();
        assert_eq!(should.len(), 2);
        assert_eq!(should[0], json!({ "term": { "status": "active" } }));
        assert_eq!(
            clause["bool"]["must"][1]["bool"]["minimum_should_match"],
            json!(1)
        );
    }

    #[test]
    fn test_single_exact_filter_is_bare_term() {
        let request = SearchRequest::match_all().with_filter("status", Filter::exact("active"));
        let clause = query_clause(&request, &test_config());
        assert_eq!(
            clause["bool"]["must"][1],
            json!({ "term": { "status": "active" } })
        );
    }

    #[test]
    fn test_all_filters_each_land_in_must() {
        let request = SearchRequest::match_all()
            .with_filter(
                "tags.tag",
                Filter::Exact {
                    match_kind: MatchKind::All,
                    value: json!("uci"),
                },
            )
            .with_filter(
                "tags.tag",
                Filter::Exact {
                    match_kind: MatchKind::All,
                    value: json!("vision"),
                },
            );
        let clause = query_clause(&request, &test_config());

        let must = clause["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 3);
        assert_eq!(must[1], json!({ "term": { "tags.tag": "uci" } }));
        assert_eq!(must[2], json!({ "term": { "tags.tag": "vision" } }));
    }

    #[test]
    fn test_range_bounds_inclusive_and_optional() {
        let both = range_clause("runs", Some(10.0), Some(100.0));
        assert_eq!(both["range"]["runs"], json!({ "gte": 10.0, "lte": 100.0 }));

        let from_only = range_clause("runs", Some(10.0), None);
        assert_eq!(from_only["range"]["runs"], json!({ "gte": 10.0 }));

        let to_only = range_clause("runs", None, Some(100.0));
        assert_eq!(to_only["range"]["runs"], json!({ "lte": 100.0 }));
    }

    #[test]
    fn test_aggregations_strip_display_names() {
        let aggs = aggregations(&test_config()).unwrap();

        assert_eq!(
            aggs["status"],
            json!({ "terms": { "field": "status", "size": 10 } })
        );

        let ranges = aggs["qualities.NumberOfInstances"]["range"]["ranges"]
            .as_array()
            .unwrap();
        assert_eq!(ranges[0], json!({ "to": 1_000.0 }));
        assert_eq!(ranges[1], json!({ "from": 1_000.0 }));
        assert!(!aggs.to_string().contains("small"));
    }

    #[test]
    fn test_no_facets_no_aggregations() {
        let config = IndexConfig::new("empty");
        assert!(aggregations(&config).is_none());
    }

    #[test]
    fn test_sort_clauses_preserve_order() {
        let sort = vec![
            SortClause::new("runs", Direction::Desc),
            SortClause::new("name", Direction::Asc),
        ];
        let clauses = sort_clauses(&sort).unwrap();
        assert_eq!(
            clauses,
            json!([
                { "runs": { "order": "desc" } },
                { "name": { "order": "asc" } },
            ])
        );

        assert!(sort_clauses(&[]).is_none());
    }
}
