use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database not available - DATABASE_URL not set")]
    DatabaseUnavailable,

    #[error("{0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::DatabaseUnavailable | AppError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!(self.to_string()),
            ),
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::to_value(errors)
                    .unwrap_or_else(|_| serde_json::json!(self.to_string())),
            ),
        };

        let body = serde_json::json!({ "detail": detail });
        (status, axum::Json(body)).into_response()
    }
}
