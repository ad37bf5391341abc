//! Mapping of lookup failures onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use ziptemp_core::LookupError;

/// Error response body. `code` repeats the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
}

/// HTTP-facing wrapper around [`LookupError`].
#[derive(Debug)]
pub struct ApiError(pub LookupError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            LookupError::InvalidPostalCode => StatusCode::UNPROCESSABLE_ENTITY,
            LookupError::NotFound => StatusCode::NOT_FOUND,
            LookupError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody { message: self.0.to_string(), code: status.as_u16() };

        (status, Json(body)).into_response()
    }
}
