use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::analytics::{CustomerSpending, SalesAnalytics, TopProduct};
use crate::domain::errors::DomainError;
use crate::domain::order::OrderPage;
use crate::domain::ports::{AnalyticsCache, CommerceStore};

pub const SALES_CACHE_TTL_SECS: u64 = 300;

const DEFAULT_PAGE_LIMIT: i64 = 10;
const MAX_PAGE_LIMIT: i64 = 100;

pub struct AnalyticsService<S, C> {
    store: S,
    cache: C,
}

impl<S: CommerceStore, C: AnalyticsCache> AnalyticsService<S, C> {
    pub fn new(store: S, cache: C) -> Self {
        Self { store, cache }
    }

    pub fn customer_spending(&self, customer_id: Uuid) -> Result<CustomerSpending, DomainError> {
        self.store.customer_spending(customer_id)
    }

    pub fn top_selling_products(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<TopProduct>, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
        self.store.top_selling_products(limit)
    }

    /// Date-range sales summary, read through the cache.
    ///
    /// The key is derived deterministically from the inclusive bounds, so an
    /// identical range within the TTL is served from the cache without
    /// touching the store.
    pub fn sales_analytics(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<SalesAnalytics, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }

        let key = format!("sales:{}:{}", start.to_rfc3339(), end.to_rfc3339());
        read_through(&self.cache, &key, SALES_CACHE_TTL_SECS, || {
            self.store.sales_analytics(start, end)
        })
    }

    pub fn customer_orders(
        &self,
        customer_id: Uuid,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<OrderPage, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
        let offset = offset.unwrap_or(0).max(0);
        self.store.customer_orders(customer_id, limit, offset)
    }
}

/// Cache-aside read: serve the cached value when present and decodable,
/// otherwise compute from the source of truth and write back with a TTL.
///
/// Cache failures on either side are logged and swallowed; only `compute`
/// errors reach the caller.
pub fn read_through<C, T, F>(
    cache: &C,
    key: &str,
    ttl_secs: u64,
    compute: F,
) -> Result<T, DomainError>
where
    C: AnalyticsCache + ?Sized,
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Result<T, DomainError>,
{
    match cache.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => log::warn!("discarding undecodable cache entry {key}: {e}"),
        },
        Ok(None) => {}
        Err(e) => log::warn!("cache read for {key} failed: {e}"),
    }

    let value = compute()?;

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(e) = cache.set_ex(key, &raw, ttl_secs) {
                log::warn!("cache write for {key} failed: {e}");
            }
        }
        Err(e) => log::warn!("failed to serialize cache entry {key}: {e}"),
    }

    Ok(value)
}
