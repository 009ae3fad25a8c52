//! Task index configuration
//!
//! Tasks have no free text of their own; searches match the task type and
//! the name of the dataset they are defined on.

use super::{FacetDef, IndexConfig, SearchField};

/// Configuration for the `task` index
pub fn config() -> IndexConfig {
    IndexConfig {
        name: "task".to_string(),
        search_fields: vec![
            SearchField::weighted("source_data.name", 3),
            SearchField::weighted("tasktype.name", 2),
            SearchField::new("estimation_procedure.name"),
        ],
        facets: vec![
            FacetDef::value("tasktype.name"),
            FacetDef::value("estimation_procedure.name"),
            FacetDef::value("evaluation_measures"),
        ],
    }
}
