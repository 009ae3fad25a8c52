//! Application state shared across handlers

use crate::config::Settings;
use crate::index::IndexRegistry;
use crate::network::StoreClient;
use crate::search::SearchConnector;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Entity index registry
    pub registry: Arc<IndexRegistry>,
    /// Store connector
    pub connector: Arc<SearchConnector>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, registry: IndexRegistry, client: StoreClient) -> Self {
        Self {
            settings: Arc::new(settings),
            registry: Arc::new(registry),
            connector: Arc::new(SearchConnector::new(client)),
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
