/// Single fixed key holding the serialized recent-users snapshot.
pub const CACHED_USERS_KEY: &str = "cached_users";

/// Expiry applied on every cache miss; bounds the stale-read window.
pub const CACHED_USERS_TTL_SECS: u64 = 30;
