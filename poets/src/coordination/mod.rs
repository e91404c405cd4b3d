//! Use-case functions that tie users, passwords and sessions together
//!
//! - `user`: registration, login and direct account creation
//! - `admin`: user management reserved for administrators
//! - `auth_helpers`: session checks against fresh database state

mod admin;
mod auth_helpers;
mod errors;
mod user;

pub use admin::{delete_user_account_admin, get_all_users, get_user, update_user_admin_status};
pub use auth_helpers::{validate_admin_session, validate_user_session};
pub use errors::CoordinationError;
pub use user::{
    LoginRequest, RegisterRequest, create_user_account, ensure_admin_account, login_user,
    register_user,
};
