//! Maps [`CoreError`] (and transport-only validation failures) to HTTP
//! responses: `OutOfRange`/`BadArgument` become `400`, everything else the
//! core cannot produce on this hot path would be a `500`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::api::dto::ErrorResponse;
use crate::error::CoreError;

/// Thin wrapper so we can impl the foreign `IntoResponse` trait for errors
/// that originate at the transport edge (bad path/query parsing) as well
/// as for `CoreError` itself.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OutOfRange { .. } | CoreError::BadArgument { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
