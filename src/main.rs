//! OpenML-Search: search service for the OpenML platform
//!
//! This is the main entry point for the application.

use anyhow::Result;
use openml_search::{
    config::Settings,
    index::IndexRegistry,
    network::StoreClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so debug mode can raise the log level
    let settings = load_settings()?;

    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!("Starting OpenML-Search v{}", openml_search::VERSION);
    info!("Document store: {}", settings.store.base_url);

    let client = StoreClient::with_settings(&settings.store.base_url, &settings.outgoing)?;

    let registry = IndexRegistry::with_defaults();
    info!("Configured {} entity indices", registry.len());

    let state = AppState::new(settings.clone(), registry, client);
    let app = create_router(state);

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Explicit path wins
    if let Ok(path) = std::env::var("OPENML_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/openml-search/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("openml-search/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
