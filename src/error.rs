use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream request failed: {0}")]
    UpstreamFetch(String),

    #[error("Upstream response unreadable: {0}")]
    UpstreamRead(String),

    #[error("Upstream response malformed: {0}")]
    UpstreamParse(String),

    #[error("Upstream returned status {0:?}")]
    UpstreamStatus(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error body returned to clients: `{"error": "<reason>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Config(_)
            | Self::UpstreamFetch(_)
            | Self::UpstreamRead(_)
            | Self::UpstreamParse(_)
            | Self::UpstreamStatus(_)
            | Self::Persistence(_)
            | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing reason. Details stay in the logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "Invalid request payload",
            Self::Config(_) => "API key missing",
            Self::UpstreamFetch(_) => "Failed to fetch news",
            Self::UpstreamRead(_) => "Failed to read response body",
            Self::UpstreamParse(_) => "Failed to parse JSON",
            Self::UpstreamStatus(_) => "API returned non-success status",
            Self::Persistence(_) | Self::Database(_) => "Failed to save articles to DB",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.reason().to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
