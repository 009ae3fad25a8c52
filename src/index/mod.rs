//! Entity index configuration
//!
//! Each OpenML entity type (dataset, task, flow, run, study) is backed by its
//! own store index with its own searchable fields and facets. The
//! configurations here are static; the registry resolves them by name.

mod registry;

// Entity configurations
pub mod dataset;
pub mod flow;
pub mod run;
pub mod study;
pub mod task;

pub use registry::IndexRegistry;

/// Default bucket count for categorical facets
pub const DEFAULT_FACET_SIZE: u32 = 10;

/// A field searched by free-text terms, with a relative weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchField {
    pub name: String,
    /// Relative importance multiplier; 1 means unweighted
    pub weight: u32,
}

impl SearchField {
    /// Field with the default weight of 1
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: 1,
        }
    }

    /// Field with an explicit weight
    pub fn weighted(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// Field name suffixed with its weight, as the store expects
    pub fn boosted(&self) -> String {
        format!("{}^{}", self.name, self.weight)
    }
}

/// A numeric facet bucket
///
/// The name is display-only and must never reach the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeBucket {
    pub name: String,
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl RangeBucket {
    pub fn new(name: impl Into<String>, from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }
}

/// A facet surfaced to the UI for filtering
#[derive(Debug, Clone, PartialEq)]
pub enum FacetDef {
    /// Categorical facet: one bucket per distinct value
    Value { field: String, size: u32 },
    /// Numeric facet with fixed buckets
    Range {
        field: String,
        buckets: Vec<RangeBucket>,
    },
}

impl FacetDef {
    /// Categorical facet with the default bucket count
    pub fn value(field: impl Into<String>) -> Self {
        Self::Value {
            field: field.into(),
            size: DEFAULT_FACET_SIZE,
        }
    }

    /// Numeric facet over the given buckets
    pub fn range(field: impl Into<String>, buckets: Vec<RangeBucket>) -> Self {
        Self::Range {
            field: field.into(),
            buckets,
        }
    }

    /// The document field this facet aggregates
    pub fn field(&self) -> &str {
        match self {
            Self::Value { field, .. } => field,
            Self::Range { field, .. } => field,
        }
    }
}

/// Static search configuration for one entity index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexConfig {
    /// Index name in the store, also the API path segment
    pub name: String,
    /// Fields matched by free-text terms
    pub search_fields: Vec<SearchField>,
    /// Facets surfaced for this entity
    pub facets: Vec<FacetDef>,
}

impl IndexConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search_fields: Vec::new(),
            facets: Vec::new(),
        }
    }

    /// Boosted field list for the store's weighted multi-field match
    pub fn boosted_fields(&self) -> Vec<String> {
        self.search_fields.iter().map(|f| f.boosted()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boosted_field_suffix() {
        assert_eq!(SearchField::new("description").boosted(), "description^1");
        assert_eq!(SearchField::weighted("name", 3).boosted(), "name^3");
    }

    #[test]
    fn test_facet_field_accessor() {
        let value = FacetDef::value("status");
        assert_eq!(value.field(), "status");

        let range = FacetDef::range(
            "runs",
            vec![RangeBucket::new("few", None, Some(10.0))],
        );
        assert_eq!(range.field(), "runs");
    }
}
