// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err.flatten() {
            ApplicationError::Validation(msg) => Self::validation(msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "CONFLICT", msg),
            ApplicationError::Unauthorized(msg) => {
                Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
            }
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            ApplicationError::Infrastructure(msg)
            | ApplicationError::Domain(DomainError::Persistence(msg)) => Self::internal(&msg),
            ApplicationError::Domain(other) => Self::validation(other.to_string()),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message.into())
    }

    fn internal(detail: &str) -> Self {
        tracing::error!(error = %detail, "request failed with an internal error");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "internal server error".into(),
        )
    }

    const fn new(status: StatusCode, code: &'static str, message: String) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            code: self.code.to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_status() {
        let cases = [
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("gone"), StatusCode::NOT_FOUND),
            (DomainError::conflict("raced"), StatusCode::CONFLICT),
            (
                DomainError::Persistence("db down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_error(err.into()).status(), status);
        }
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = HttpError::from_error(ApplicationError::infrastructure("password=hunter2"));
        assert_eq!(err.code, "INTERNAL_ERROR");
        assert!(!err.message.contains("hunter2"));
    }
}
