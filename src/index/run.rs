//! Run index configuration
//!
//! Runs are matched through the flow and task they connect, since they have
//! no descriptive text themselves.

use super::{FacetDef, IndexConfig, SearchField};

/// Configuration for the `run` index
pub fn config() -> IndexConfig {
    IndexConfig {
        name: "run".to_string(),
        search_fields: vec![
            SearchField::weighted("run_flow.name", 2),
            SearchField::weighted("run_task.source_data.name", 2),
            SearchField::new("uploader"),
        ],
        facets: vec![
            FacetDef::value("run_task.tasktype.name"),
            FacetDef::value("run_flow.name"),
        ],
    }
}
