use chrono::{Duration, Utc};
use http::header::HeaderMap;

use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE};
use crate::session::errors::SessionError;
use crate::session::types::StoredSession;
use crate::storage::{CacheData, GENERIC_CACHE_STORE};
use crate::userdb::{User, UserStore};
use crate::utils::{gen_random_string, header_set_cookie};

const SESSION_PREFIX: &str = "session";

/// Build the headers that clear the session cookie and drop the stored session
///
/// Works for anonymous callers too; without a session id only the cookie is cleared.
pub async fn prepare_logout_response(session_id: Option<&str>) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        "value",
        -86400,
        *SESSION_COOKIE_SECURE,
    )?;

    if let Some(session_id) = session_id {
        delete_session_from_store_by_session_id(session_id).await?;
    }

    Ok(headers)
}

pub(super) async fn create_new_session_with_uid(user_id: i64) -> Result<HeaderMap, SessionError> {
    let session_id = gen_random_string(32)?;
    let ttl = *SESSION_COOKIE_MAX_AGE;
    let expires_at = Utc::now() + Duration::seconds(ttl as i64);

    let stored_session = StoredSession {
        user_id,
        expires_at,
        ttl,
    };
    let cache_data: CacheData = stored_session.try_into()?;

    GENERIC_CACHE_STORE
        .lock()
        .await
        .put_with_ttl(SESSION_PREFIX, &session_id, cache_data, ttl as usize)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        &session_id,
        ttl as i64,
        *SESSION_COOKIE_SECURE,
    )?;

    Ok(headers)
}

pub(crate) async fn delete_session_from_store_by_session_id(
    session_id: &str,
) -> Result<(), SessionError> {
    GENERIC_CACHE_STORE
        .lock()
        .await
        .remove(SESSION_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))
}

/// Resolve a session id to the user row it belongs to
///
/// The user is read from the database on every call, so role changes and
/// deletions take effect immediately. Expired sessions are removed.
pub async fn get_user_from_session(session_id: &str) -> Result<User, SessionError> {
    let cached_session = GENERIC_CACHE_STORE
        .lock()
        .await
        .get(SESSION_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?
        .ok_or(SessionError::NotFound)?;

    let stored_session: StoredSession = cached_session.try_into()?;

    if stored_session.is_expired() {
        tracing::debug!(expires_at = %stored_session.expires_at, "Session expired");
        delete_session_from_store_by_session_id(session_id).await?;
        return Err(SessionError::Expired);
    }

    UserStore::get_user(stored_session.user_id)
        .await?
        .ok_or(SessionError::UserGone(stored_session.user_id))
}
