use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate of a customer's completed orders.
///
/// `last_order_date` is `None` when the customer has no completed orders;
/// the monetary fields default to zero in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSpending {
    pub customer_id: Uuid,
    pub total_spent: BigDecimal,
    pub average_order_value: BigDecimal,
    pub last_order_date: Option<DateTime<Utc>>,
}

/// Substitute name for top sellers whose product was deleted from the
/// catalog after being ordered.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

#[derive(Debug, Clone, PartialEq)]
pub struct TopProduct {
    pub product_id: Uuid,
    /// Current catalog name, or "Unknown Product" if the product was deleted.
    pub name: String,
    pub total_sold: i64,
}

/// Revenue attributed to one product category.
///
/// `category` is `None` for lines whose product no longer exists in the
/// catalog; that revenue is bucketed rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: Option<String>,
    pub revenue: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesAnalytics {
    pub total_revenue: BigDecimal,
    pub completed_orders: i64,
    pub category_breakdown: Vec<CategoryRevenue>,
}
