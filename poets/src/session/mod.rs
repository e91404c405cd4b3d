mod config;
mod errors;
mod main;
mod types;

pub use config::SESSION_COOKIE_NAME;
pub use errors::SessionError;
pub use main::{get_user_from_session, prepare_logout_response};

pub(crate) use main::renew_session_header;
