use redis::Commands;

use crate::domain::errors::CacheError;
use crate::domain::ports::AnalyticsCache;

/// Redis-backed analytics cache using plain GET/SETEX.
///
/// `redis::Client` hands out a fresh connection per call; callers run on the
/// blocking pool, so the sync API is fine here.
#[derive(Clone)]
pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    pub fn new(redis_url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url).map_err(|e| CacheError(e.to_string()))?;
        Ok(Self { client })
    }
}

impl AnalyticsCache for RedisCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self
            .client
            .get_connection()
            .map_err(|e| CacheError(e.to_string()))?;
        conn.get(key).map_err(|e| CacheError(e.to_string()))
    }

    fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError> {
        let mut conn = self
            .client
            .get_connection()
            .map_err(|e| CacheError(e.to_string()))?;
        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .map_err(|e| CacheError(e.to_string()))
    }
}
