use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use common::types::ApiResponse;
use service::errors::ServiceError;

/// JSON error rendered in the shared `ApiResponse` envelope
/// (`data` is always null on failure).
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body: ApiResponse<()> = ApiResponse::failure(self.status.as_u16(), self.message);
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Key does not exist."),
            ServiceError::AlreadyExists(_) => Self::new(StatusCode::CONFLICT, "Key already exists."),
            other => {
                error!(err = %other, "backing store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}
