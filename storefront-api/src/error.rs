use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storefront_core::SourceError;

#[derive(Debug)]
pub enum AppError {
    NotFoundError(String),
    UpstreamError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::UpstreamError(msg) => {
                tracing::error!("Items API failure: {}", msg);
                (StatusCode::BAD_GATEWAY, "Items API unavailable".to_string())
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Configuration(_) => Self::InternalServerError(err.to_string()),
            _ => Self::UpstreamError(err.to_string()),
        }
    }
}
