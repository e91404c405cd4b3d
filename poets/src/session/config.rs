use std::{env, sync::LazyLock};

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_NAME")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or("poets_session".to_string())
});

/// Session lifetime in seconds
pub(super) static SESSION_COOKIE_MAX_AGE: LazyLock<u64> =
    LazyLock::new(|| parse_max_age(env::var("SESSION_COOKIE_MAX_AGE").ok()));

/// Adds the `Secure` attribute; off by default so plain HTTP deployments work
pub(super) static SESSION_COOKIE_SECURE: LazyLock<bool> =
    LazyLock::new(|| parse_flag(env::var("SESSION_COOKIE_SECURE").ok()));

/// Longest accepted session lifetime: one year
const MAX_SESSION_AGE: u64 = 365 * 24 * 60 * 60;

fn parse_max_age(value: Option<String>) -> u64 {
    value
        .and_then(|s| s.parse().ok())
        .filter(|secs| (1..=MAX_SESSION_AGE).contains(secs))
        .unwrap_or(3600)
}

fn parse_flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::to_ascii_lowercase).as_deref(),
        Some("true" | "1" | "yes")
    )
}
