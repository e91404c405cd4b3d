//! Shared setup for tests that touch the global stores

use http::HeaderMap;
use http::header::SET_COOKIE;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::session::SESSION_COOKIE_NAME;

/// Load `.env_test` once and initialize the stores
///
/// The SQLite file named by `GENERIC_DATA_STORE_URL` is removed on first use
/// so every test run starts from an empty database.
pub(crate) async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        if let Some(db_path) = std::env::var("GENERIC_DATA_STORE_URL")
            .ok()
            .and_then(|url| extract_sqlite_file_path_from_url(&url))
        {
            let _ = std::fs::remove_file(db_path);
        }
    });

    if let Err(e) = crate::storage::init().await {
        eprintln!("Warning: Failed to initialize storage: {e}");
    }
    if let Err(e) = crate::userdb::init().await {
        eprintln!("Warning: Failed to initialize UserStore: {e}");
    }
}

/// A fresh email address per call, unique within the test process
pub(crate) fn unique_email(tag: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{tag}-{n}-{}@example.com", chrono::Utc::now().timestamp_millis())
}

/// Pull the session id out of the `Set-Cookie` header issued on login
pub(crate) fn session_id_from_headers(headers: &HeaderMap) -> String {
    let prefix = format!("{}=", SESSION_COOKIE_NAME.as_str());
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|c| c.strip_prefix(&prefix))
        .and_then(|rest| rest.split(';').next())
        .map(str::to_string)
        .expect("Session cookie should be set")
}

/// File path behind a SQLite URL, or `None` for in-memory and non-SQLite URLs
fn extract_sqlite_file_path_from_url(url: &str) -> Option<String> {
    let path = url.strip_prefix("sqlite:")?;
    let path = path.strip_prefix("file:").unwrap_or(path);
    let path = path.strip_prefix("//").unwrap_or(path);
    let path = path.split('?').next()?;

    if path.is_empty() || path.contains(":memory:") || url.contains("mode=memory") {
        return None;
    }
    Some(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_sqlite_file_path_from_url() {
        assert_eq!(
            extract_sqlite_file_path_from_url("sqlite:/tmp/test.db"),
            Some("/tmp/test.db".to_string())
        );
        assert_eq!(
            extract_sqlite_file_path_from_url("sqlite:./test.db"),
            Some("./test.db".to_string())
        );
        assert_eq!(
            extract_sqlite_file_path_from_url("sqlite:file:/tmp/test.db?mode=rwc"),
            Some("/tmp/test.db".to_string())
        );
        assert_eq!(extract_sqlite_file_path_from_url("sqlite::memory:"), None);
        assert_eq!(
            extract_sqlite_file_path_from_url("sqlite:file:poets?mode=memory&cache=shared"),
            None
        );
        assert_eq!(
            extract_sqlite_file_path_from_url("postgresql://localhost/poets"),
            None
        );
    }

    #[test]
    fn test_unique_email_differs() {
        assert_ne!(unique_email("a"), unique_email("a"));
    }
}
