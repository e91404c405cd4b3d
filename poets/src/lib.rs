//! poets - user accounts, sessions and role-based authorization
//!
//! Users are stored in SQLite or PostgreSQL through sqlx, sessions live in an
//! in-memory or Redis cache store, and passwords are hashed with argon2.
//! The functions re-exported here are what an HTTP layer needs to register,
//! log in, log out and administer users.

mod config;
mod coordination;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    CoordinationError, LoginRequest, RegisterRequest, create_user_account,
    delete_user_account_admin, ensure_admin_account, get_all_users, get_user, login_user,
    register_user, update_user_admin_status, validate_admin_session, validate_user_session,
};

pub use session::{
    SESSION_COOKIE_NAME, SessionError, get_user_from_session, prepare_logout_response,
};

pub use userdb::{NewUser, User, UserError};

/// Initialize the stores and create the bootstrap admin when configured
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    userdb::init().await?;

    if let Some((email, password)) = config::BOOTSTRAP_ADMIN.as_ref() {
        ensure_admin_account(email, password).await?;
    }

    Ok(())
}
