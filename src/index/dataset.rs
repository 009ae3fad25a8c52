//! Dataset index configuration
//!
//! Datasets carry data qualities (instance/feature counts) computed by the
//! platform, which back the numeric facets here.

use super::{FacetDef, IndexConfig, RangeBucket, SearchField};

/// Configuration for the `data` index
pub fn config() -> IndexConfig {
    IndexConfig {
        name: "data".to_string(),
        search_fields: vec![
            SearchField::weighted("name", 3),
            SearchField::new("description"),
            SearchField::new("tags.tag"),
        ],
        facets: vec![
            FacetDef::value("status"),
            FacetDef::value("licence"),
            FacetDef::value("format"),
            FacetDef::range("qualities.NumberOfInstances", instance_buckets()),
            FacetDef::range("qualities.NumberOfFeatures", feature_buckets()),
        ],
    }
}

fn instance_buckets() -> Vec<RangeBucket> {
    vec![
        RangeBucket::new("Less than 1000", None, Some(1_000.0)),
        RangeBucket::new("1000s", Some(1_000.0), Some(10_000.0)),
        RangeBucket::new("10000s", Some(10_000.0), Some(100_000.0)),
        RangeBucket::new("100000s", Some(100_000.0), Some(1_000_000.0)),
        RangeBucket::new("Millions", Some(1_000_000.0), None),
    ]
}

fn feature_buckets() -> Vec<RangeBucket> {
    vec![
        RangeBucket::new("Less than 10", None, Some(10.0)),
        RangeBucket::new("10s", Some(10.0), Some(100.0)),
        RangeBucket::new("100s", Some(100.0), Some(1_000.0)),
        RangeBucket::new("1000s", Some(1_000.0), None),
    ]
}
