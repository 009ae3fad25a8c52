//! Study (benchmark collection) index configuration

use super::{FacetDef, IndexConfig, SearchField};

/// Configuration for the `study` index
pub fn config() -> IndexConfig {
    IndexConfig {
        name: "study".to_string(),
        search_fields: vec![
            SearchField::weighted("name", 3),
            SearchField::new("description"),
        ],
        facets: vec![
            FacetDef::value("study_type"),
            FacetDef::value("main_entity_type"),
        ],
    }
}
