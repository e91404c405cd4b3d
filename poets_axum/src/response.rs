use axum::Json;
use http::StatusCode;
use serde::Serialize;

use poets::User;

/// Body shape shared by every response
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub payload: T,
}

/// Serializes as `{}`
#[derive(Debug, Default, Serialize)]
pub struct EmptyPayload {}

#[derive(Debug, Serialize)]
pub struct UserPayload {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UsersPayload {
    pub users: Vec<User>,
}

pub(crate) fn envelope<T: Serialize>(
    status: StatusCode,
    message: &str,
    payload: T,
) -> (StatusCode, Json<Envelope<T>>) {
    (
        status,
        Json(Envelope {
            message: message.to_string(),
            payload,
        }),
    )
}
