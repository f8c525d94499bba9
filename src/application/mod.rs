pub mod analytics_service;
pub mod order_service;

pub use analytics_service::{read_through, AnalyticsService, SALES_CACHE_TTL_SECS};
pub use order_service::OrderService;
