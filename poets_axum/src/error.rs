use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use poets::{CoordinationError, UserError};

use crate::response::{EmptyPayload, Envelope};

/// Error response rendered as an envelope with an empty payload
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Unauthorized")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(Envelope {
                message: self.message,
                payload: EmptyPayload {},
            }),
        )
            .into_response()
    }
}

impl From<CoordinationError> for ApiError {
    fn from(err: CoordinationError) -> Self {
        match err {
            CoordinationError::Validation(message) => Self::bad_request(message),
            CoordinationError::InvalidCredentials => {
                Self::bad_request(CoordinationError::InvalidCredentials.to_string())
            }
            CoordinationError::UserError(UserError::DuplicateEmail) => {
                Self::bad_request(UserError::DuplicateEmail.to_string())
            }
            CoordinationError::Unauthorized => Self::unauthorized(),
            CoordinationError::ResourceNotFound { resource_type, .. } => {
                Self::new(StatusCode::NOT_FOUND, format!("{resource_type} not found"))
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ApiError>;
}

impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, ApiError> {
        self.map_err(ApiError::from)
    }
}

impl<T> IntoResponseError<T> for Result<T, poets::SessionError> {
    fn into_response_error(self) -> Result<T, ApiError> {
        self.map_err(|e| {
            tracing::error!(error = %e, "Session operation failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        })
    }
}
