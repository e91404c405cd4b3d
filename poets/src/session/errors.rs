use thiserror::Error;

use crate::userdb::UserError;
use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("No session for this id")]
    NotFound,

    #[error("Session has expired")]
    Expired,

    /// The session outlived the account it points at
    #[error("Session user {0} no longer exists")]
    UserGone(i64),

    #[error("Session store error: {0}")]
    Storage(String),

    #[error(transparent)]
    Utils(#[from] UtilError),

    #[error(transparent)]
    User(#[from] UserError),
}
