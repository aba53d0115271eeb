use std::sync::Arc;

use crate::cache::keys::{CACHED_USERS_KEY, CACHED_USERS_TTL_SECS};
use crate::cache::UserCache;
use crate::error::AppError;
use crate::store::{UserRecord, UserStore};

/// Fixed listing size; there is no pagination.
const RECENT_LIMIT: i64 = 10;

/// Where a listing response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Cache,
    Db,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::Cache => "CACHE",
            DataSource::Db => "DB",
        }
    }
}

/// Read-through listing over the store, with an optional cache in front.
/// `cache` is `None` when caching is disabled by configuration.
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn UserStore>,
    cache: Option<Arc<dyn UserCache>>,
}

impl ListingService {
    pub fn new(store: Arc<dyn UserStore>, cache: Option<Arc<dyn UserCache>>) -> Self {
        Self { store, cache }
    }

    /// Returns the 10 most recent users by descending id, and whether they
    /// were served from the cache or the store.
    ///
    /// On a miss the store result is cached with a 30s expiry. Concurrent
    /// misses may each write the cache; the snapshots are identical, so
    /// last write wins. A payload that fails to decode is treated as a miss
    /// and overwritten rather than surfaced to the caller.
    pub async fn list_recent(&self) -> Result<(Vec<UserRecord>, DataSource), AppError> {
        self.store.ensure_table().await?;

        let Some(cache) = &self.cache else {
            let rows = self.store.recent_users(RECENT_LIMIT).await?;
            return Ok((rows, DataSource::Db));
        };

        if let Some(payload) = cache.get(CACHED_USERS_KEY).await? {
            match serde_json::from_str::<Vec<UserRecord>>(&payload) {
                Ok(rows) => return Ok((rows, DataSource::Cache)),
                Err(e) => {
                    tracing::warn!("discarding undecodable cache payload: {}", e);
                }
            }
        }

        let rows = self.store.recent_users(RECENT_LIMIT).await?;
        match serde_json::to_string(&rows) {
            Ok(payload) => {
                cache
                    .set_ex(CACHED_USERS_KEY, &payload, CACHED_USERS_TTL_SECS)
                    .await?;
            }
            Err(e) => {
                tracing::warn!("failed to serialize listing for cache: {}", e);
            }
        }
        Ok((rows, DataSource::Db))
    }
}
