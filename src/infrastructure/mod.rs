pub mod commerce_store;
pub mod models;
pub mod redis_cache;

pub use commerce_store::DieselCommerceStore;
pub use redis_cache::RedisCache;
