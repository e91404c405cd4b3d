use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A registered account as stored in the users table
#[derive(Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Database-assigned identifier
    pub id: i64,
    /// Login identifier, unique across users
    pub email: String,
    /// Argon2 PHC string; never leaves the server
    #[serde(skip)]
    #[sqlx(rename = "password")]
    pub(crate) password_hash: String,
    /// Whether the user may manage other accounts
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    /// Unset until the row is first updated
    pub edited_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("is_admin", &self.is_admin)
            .field("created_at", &self.created_at)
            .field("edited_at", &self.edited_at)
            .finish_non_exhaustive()
    }
}

/// Input for creating a user directly, bypassing the registration form
#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone)]
pub(crate) enum UserSearchField {
    Id(i64),
    Email(String),
}

impl fmt::Display for UserSearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSearchField::Id(id) => write!(f, "id={id}"),
            UserSearchField::Email(email) => write!(f, "email={email}"),
        }
    }
}
