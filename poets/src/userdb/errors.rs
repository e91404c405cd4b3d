use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum UserError {
    #[error("User with this email already exists.")]
    DuplicateEmail,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Password error: {0}")]
    Password(String),
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserError::DuplicateEmail
            }
            _ => UserError::Storage(err.to_string()),
        }
    }
}

impl From<argon2::password_hash::Error> for UserError {
    fn from(err: argon2::password_hash::Error) -> Self {
        UserError::Password(err.to_string())
    }
}
