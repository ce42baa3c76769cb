use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use postforge_types::ClientError;
use serde::Serialize;

/// `{ "error": "..." }`
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Axum adapter for [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError(pub ClientError);

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorBody { error: self.0.message() })).into_response()
    }
}
