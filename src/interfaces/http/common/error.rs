//! Mapping of domain failures onto HTTP responses
//!
//! Responses carry an opaque code and a message only. Internal failure
//! details go to the log, never to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::ApiResponse;
use crate::domain::DomainError;

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "not_found", err.to_string())
            }
            DomainError::Validation(msg) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, "validation_failed", msg)
            }
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "conflict", msg),
            DomainError::InvalidCredentials => Self::new(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "Invalid credentials",
            ),
            DomainError::Unauthorized(msg) => Self::unauthorized(msg),
            DomainError::Internal(detail) => {
                error!(%detail, "Internal error while handling request");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.code, self.message);
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_and_code() {
        let cases = [
            (DomainError::not_found("Payment", "x"), StatusCode::NOT_FOUND, "not_found"),
            (DomainError::Validation("bad".into()), StatusCode::UNPROCESSABLE_ENTITY, "validation_failed"),
            (DomainError::Conflict("dup".into()), StatusCode::CONFLICT, "conflict"),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED, "invalid_credentials"),
            (DomainError::Unauthorized("no".into()), StatusCode::UNAUTHORIZED, "unauthorized"),
        ];
        for (err, status, code) in cases {
            let api: ApiError = err.into();
            assert_eq!((api.status, api.code), (status, code));
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let api: ApiError = DomainError::Internal("bcrypt exploded at line 42".into()).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Internal server error");
    }
}
