use http::HeaderMap;

use crate::session::errors::SessionError;

use super::session::{create_new_session_with_uid, delete_session_from_store_by_session_id};

/// Issue a fresh session for `user_id`, discarding the caller's previous one
#[tracing::instrument(skip(previous_session_id))]
pub(crate) async fn renew_session_header(
    user_id: i64,
    previous_session_id: Option<&str>,
) -> Result<HeaderMap, SessionError> {
    if let Some(old) = previous_session_id {
        delete_session_from_store_by_session_id(old).await?;
    }

    let headers = create_new_session_with_uid(user_id).await?;
    tracing::debug!("Created session cookie");

    Ok(headers)
}
