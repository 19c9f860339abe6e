// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use crate::application::record_service::RecordService;
use crate::infrastructure::config::{EnvSettings, load_app_config};
use crate::infrastructure::notion_repository::NotionRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::api_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local development reads secrets from a .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration; a missing bearer credential fails startup here
    let app_config = load_app_config()?;
    let env_settings = EnvSettings::from_env()?;
    let token = env_settings.integration_token()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(NotionRepository::new(&app_config.notion, token)?);

    // Create service (application layer)
    let record_service = RecordService::new(repository, env_settings);

    // Create application state
    let state = Arc::new(AppState { record_service });

    // Build router (presentation layer)
    let router = api_router(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind.parse()?;
    println!("Starting notion-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
