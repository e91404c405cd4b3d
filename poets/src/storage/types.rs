use serde::{Deserialize, Serialize};

/// Opaque value held by the cache store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CacheData {
    pub value: String,
}
