mod cookie;
mod session;

pub use session::{get_user_from_session, prepare_logout_response};

pub(crate) use cookie::renew_session_header;
