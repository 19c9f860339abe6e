// HTTP request handlers
use crate::application::page_repository::DatabaseSummary;
use crate::domain::collection::Collection;
use crate::error::Result;
use crate::presentation::app_state::AppState;
use axum::http::Method;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct DatabaseQuery {
    pub database: Option<String>,
}

#[derive(Serialize)]
pub struct ConnectionStatus {
    pub success: bool,
    pub message: String,
    pub database: DatabaseSummary,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Fetch one collection as flat records. The `database` parameter defaults
/// to `users`; unknown values are rejected.
pub async fn fetch_records(
    Query(query): Query<DatabaseQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response> {
    let collection = Collection::parse(query.database.as_deref())?;
    tracing::debug!("fetching {} records", collection);

    let response = match collection {
        Collection::Users => Json(state.record_service.fetch_users().await?).into_response(),
        Collection::Services => Json(state.record_service.fetch_services().await?).into_response(),
    };
    Ok(response)
}

/// Fetch both collections at once for the combined dashboard view.
pub async fn fetch_dashboard(State(state): State<Arc<AppState>>) -> Result<Response> {
    let dashboard = state.record_service.fetch_dashboard().await?;
    Ok(Json(dashboard).into_response())
}

/// Verify credentials and configuration by retrieving database metadata.
pub async fn test_connection(State(state): State<Arc<AppState>>) -> Result<Response> {
    let database = state.record_service.check_connection().await?;
    Ok(Json(ConnectionStatus {
        success: true,
        message: "Successfully connected to Notion API".to_string(),
        database,
    })
    .into_response())
}

/// Build the HTTP router. CORS is wide open: the dashboard frontend is
/// served from a different origin in every deployment variant.
pub fn api_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/notion", get(fetch_records))
        .route("/api/dashboard", get(fetch_dashboard))
        .route("/api/test-connection", get(test_connection))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
