// Error taxonomy shared across layers
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required setting is absent from the environment. Deterministic;
    /// needs an operator fix, never a retry.
    #[error("{} environment variable is not set{}", primary(.candidates), fallbacks(.candidates))]
    Configuration { candidates: Vec<String> },

    /// The remote API answered with a non-success status.
    #[error("Notion request failed with status {status}: {message}")]
    RemoteService { status: u16, message: String },

    /// Transport-level failure talking to the remote API.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid database parameter {0:?}: use \"users\" or \"services\"")]
    InvalidDatabase(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

fn primary(candidates: &[String]) -> &str {
    candidates.first().map(String::as_str).unwrap_or("required")
}

fn fallbacks(candidates: &[String]) -> String {
    if candidates.len() > 1 {
        format!(" (also tried {})", candidates[1..].join(", "))
    } else {
        String::new()
    }
}

impl ApiError {
    /// Configuration error naming every candidate setting that was tried.
    pub fn missing_setting(candidates: &[&str]) -> Self {
        ApiError::Configuration {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidDatabase(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!("request failed: {message}");
        } else {
            tracing::warn!("request rejected: {message}");
        }
        (status, Json(ErrorBody { message })).into_response()
    }
}
