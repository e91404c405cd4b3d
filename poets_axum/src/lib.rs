//! Axum integration for the poets backend
//!
//! Mount [`poets_router`] to serve user registration, login, logout and the
//! admin-only user management routes. Every response body is a JSON
//! [`Envelope`] of the form `{"message": ..., "payload": {...}}`.

mod error;
mod response;
mod router;
mod session;
mod user;

pub use error::{ApiError, IntoResponseError};
pub use response::{EmptyPayload, Envelope, UserPayload, UsersPayload};
pub use router::{poets_router, poets_router_no_trace};
pub use session::{AdminUser, AuthRejection};

pub use poets::{SESSION_COOKIE_NAME, init};
