use std::sync::atomic::{AtomicUsize, Ordering};

use poets::{NewUser, User};

pub const PASSWORD: &str = "password";

/// A fresh email address per call
pub fn unique_email(tag: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{tag}-{n}-{}@example.com", std::process::id())
}

/// Create a user directly in the store, bypassing the registration route
pub async fn create_user_fixture(email: &str, is_admin: bool) -> User {
    poets::create_user_account(NewUser {
        email: email.to_string(),
        password: PASSWORD.to_string(),
        is_admin,
    })
    .await
    .expect("Failed to create fixture user")
}

/// Delete every user; failures are logged and do not fail the test
pub async fn cleanup_users() {
    match poets::get_all_users().await {
        Ok(users) => {
            for user in users {
                if let Err(e) = poets::delete_user_account_admin(user.id).await {
                    eprintln!("Cleanup: failed to delete user {}: {e}", user.id);
                }
            }
        }
        Err(e) => eprintln!("Cleanup: failed to list users: {e}"),
    }
}
