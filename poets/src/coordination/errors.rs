use thiserror::Error;

use crate::session::SessionError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Errors surfaced by the coordination functions
#[derive(Error, Debug)]
pub enum CoordinationError {
    #[error("Database error: {0}")]
    Database(String),

    /// Input rejected before any state changed; the message is user-facing
    #[error("{0}")]
    Validation(String),

    /// Unknown email or wrong password, deliberately not told apart
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Missing session, expired session, or not an admin
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    #[error("User error: {0}")]
    UserError(UserError),

    #[error("Session error: {0}")]
    SessionError(SessionError),

    #[error("Utils error: {0}")]
    UtilsError(UtilError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Database(msg) => tracing::error!("Database error: {}", msg),
            Self::Validation(msg) => tracing::debug!("Validation failed: {}", msg),
            Self::InvalidCredentials => tracing::debug!("Invalid credentials"),
            Self::Unauthorized => tracing::debug!("Unauthorized access"),
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::debug!("Resource not found: {} {}", resource_type, resource_id),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::UtilsError(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = Self::UserError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UtilError> for CoordinationError {
    fn from(err: UtilError) -> Self {
        let error = Self::UtilsError(err);
        tracing::error!("{}", error);
        error
    }
}
