use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The only status this service ever writes; analytics read it as a filter.
pub const STATUS_COMPLETED: &str = "completed";

/// One requested product/quantity pair of a placement request.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Snapshot of the product price at order time, never recomputed.
    pub price_at_purchase: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub total_amount: BigDecimal,
    pub order_date: DateTime<Utc>,
    pub lines: Vec<OrderLineView>,
}

/// One page of a customer's order history plus the total matching count.
#[derive(Debug, Clone)]
pub struct OrderPage {
    pub orders: Vec<OrderView>,
    pub total_count: i64,
}
