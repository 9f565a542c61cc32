use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fable_store::StoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidSettings(_) => Self::ValidationError(err.to_string()),
        }
    }
}
