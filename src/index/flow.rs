//! Flow index configuration

use super::{FacetDef, IndexConfig, RangeBucket, SearchField};

/// Configuration for the `flow` index
pub fn config() -> IndexConfig {
    IndexConfig {
        name: "flow".to_string(),
        search_fields: vec![
            SearchField::weighted("name", 3),
            SearchField::new("description"),
            SearchField::new("dependencies"),
        ],
        facets: vec![
            FacetDef::value("uploader"),
            FacetDef::range("runs", run_count_buckets()),
        ],
    }
}

fn run_count_buckets() -> Vec<RangeBucket> {
    vec![
        RangeBucket::new("Less than 10", None, Some(10.0)),
        RangeBucket::new("10s", Some(10.0), Some(100.0)),
        RangeBucket::new("100s", Some(100.0), Some(1_000.0)),
        RangeBucket::new("1000s or more", Some(1_000.0), None),
    ]
}
