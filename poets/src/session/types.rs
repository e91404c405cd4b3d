use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::errors::SessionError;
use crate::storage::CacheData;

/// Server-side record named by the session cookie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(super) struct StoredSession {
    pub(super) user_id: i64,
    pub(super) expires_at: DateTime<Utc>,
    pub(super) ttl: u64,
}

impl StoredSession {
    pub(super) fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

impl TryFrom<StoredSession> for CacheData {
    type Error = SessionError;

    fn try_from(data: StoredSession) -> Result<Self, Self::Error> {
        let value =
            serde_json::to_string(&data).map_err(|e| SessionError::Storage(e.to_string()))?;
        Ok(Self { value })
    }
}

impl TryFrom<CacheData> for StoredSession {
    type Error = SessionError;

    fn try_from(data: CacheData) -> Result<Self, Self::Error> {
        serde_json::from_str(&data.value).map_err(|e| SessionError::Storage(e.to_string()))
    }
}
