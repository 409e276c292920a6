use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A user-supplied title did not resolve to any catalog entry
    #[error("Movie '{title}' not found in database")]
    NotFound { title: String },

    /// Similarity matrix dimensions do not match the catalog size
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Catalog index outside `[0, size)`
    #[error("Index {index} out of range for catalog of {size} movies")]
    OutOfRange { index: usize, size: usize },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Artifact error: {0}")]
    Artifact(String),
}

impl AppError {
    pub fn not_found(title: impl Into<String>) -> Self {
        AppError::NotFound {
            title: title.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            AppError::NotFound { title } => (
                StatusCode::NOT_FOUND,
                json!({ "error": message, "title": title }),
            ),
            AppError::ShapeMismatch { .. }
            | AppError::OutOfRange { .. }
            | AppError::InvalidCatalog(_)
            | AppError::Artifact(_) => {
                tracing::error!(error = %message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
