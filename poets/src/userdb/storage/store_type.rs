use crate::storage::GENERIC_DATA_STORE;
use crate::userdb::{
    errors::UserError,
    types::{User, UserSearchField},
};

use super::postgres::*;
use super::sqlite::*;

pub(crate) struct UserStore;

impl UserStore {
    /// Create the users table if needed and check its columns
    pub(crate) async fn init() -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            create_tables_sqlite(pool).await?;
            validate_user_tables_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            create_tables_postgres(pool).await?;
            validate_user_tables_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    pub(crate) async fn get_all_users() -> Result<Vec<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_all_users_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            get_all_users_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    #[tracing::instrument(fields(user_id = %id))]
    pub(crate) async fn get_user(id: i64) -> Result<Option<User>, UserError> {
        Self::get_user_by(UserSearchField::Id(id)).await
    }

    #[tracing::instrument(fields(user_field = %field))]
    pub(crate) async fn get_user_by(field: UserSearchField) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            get_user_by_field_sqlite(pool, &field).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_by_field_postgres(pool, &field).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(Some(_)) => tracing::debug!(found = true, "User lookup completed"),
            Ok(None) => tracing::debug!(found = false, "User lookup completed - not found"),
            Err(e) => tracing::error!(error = %e, "User lookup failed"),
        }

        result
    }

    /// Insert a new row; the hash must already be computed
    #[tracing::instrument(skip(password_hash))]
    pub(crate) async fn create_user(
        email: &str,
        password_hash: &str,
        is_admin: bool,
    ) -> Result<User, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            insert_user_sqlite(pool, email, password_hash, is_admin).await
        } else if let Some(pool) = store.as_postgres() {
            insert_user_postgres(pool, email, password_hash, is_admin).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(user) => tracing::info!(user_id = user.id, is_admin, "User created"),
            Err(UserError::DuplicateEmail) => {
                tracing::info!("User insert rejected: email already taken")
            }
            Err(e) => tracing::error!(error = %e, "User insert failed"),
        }

        result
    }

    /// Set the admin flag and stamp `edited_at`. `None` when the id is unknown.
    #[tracing::instrument]
    pub(crate) async fn update_admin_status(
        id: i64,
        is_admin: bool,
    ) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            update_admin_status_sqlite(pool, id, is_admin).await
        } else if let Some(pool) = store.as_postgres() {
            update_admin_status_postgres(pool, id, is_admin).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Delete a row and hand back what it held
    #[tracing::instrument]
    pub(crate) async fn delete_user(id: i64) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            delete_user_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }
}
