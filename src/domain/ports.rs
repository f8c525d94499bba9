use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::analytics::{CustomerSpending, SalesAnalytics, TopProduct};
use super::errors::{CacheError, DomainError};
use super::order::{OrderItem, OrderPage, OrderView};

/// Port to the document store holding the catalog and the orders.
///
/// `place_order` is the only mutation and must be all-or-nothing: either
/// every stock decrement and the order insert commit together, or none do.
pub trait CommerceStore: Send + Sync + 'static {
    fn place_order(&self, customer_id: Uuid, items: &[OrderItem])
        -> Result<OrderView, DomainError>;

    fn find_order(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;

    fn customer_orders(
        &self,
        customer_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<OrderPage, DomainError>;

    fn customer_spending(&self, customer_id: Uuid) -> Result<CustomerSpending, DomainError>;

    fn top_selling_products(&self, limit: i64) -> Result<Vec<TopProduct>, DomainError>;

    fn sales_analytics(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<SalesAnalytics, DomainError>;
}

/// Port to the expiring key-value cache in front of the analytics reads.
pub trait AnalyticsCache: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError>;
}
