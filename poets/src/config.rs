//! Startup configuration for the poets crate

use std::{env, sync::LazyLock};

/// Credentials of the administrator created at startup, if both are set
pub(crate) static BOOTSTRAP_ADMIN: LazyLock<Option<(String, String)>> = LazyLock::new(|| {
    bootstrap_admin_from(
        env::var("POETS_ADMIN_EMAIL").ok(),
        env::var("POETS_ADMIN_PASSWORD").ok(),
    )
});

fn bootstrap_admin_from(
    email: Option<String>,
    password: Option<String>,
) -> Option<(String, String)> {
    match (email, password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            Some((email, password))
        }
        _ => None,
    }
}
