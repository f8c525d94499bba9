use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::analytics::{CategoryRevenue, CustomerSpending, SalesAnalytics, TopProduct};
use crate::errors::AppError;
use crate::AppAnalyticsService;

use super::orders::OrderResponse;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerSpendingResponse {
    pub customer_id: Uuid,
    pub total_spent: String,
    pub average_order_value: String,
    pub last_order_date: Option<String>,
}

impl From<CustomerSpending> for CustomerSpendingResponse {
    fn from(s: CustomerSpending) -> Self {
        CustomerSpendingResponse {
            customer_id: s.customer_id,
            total_spent: s.total_spent.to_string(),
            average_order_value: s.average_order_value.to_string(),
            last_order_date: s.last_order_date.map(|d| d.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopProductResponse {
    pub product_id: Uuid,
    pub name: String,
    pub total_sold: i64,
}

impl From<TopProduct> for TopProductResponse {
    fn from(p: TopProduct) -> Self {
        TopProductResponse {
            product_id: p.product_id,
            name: p.name,
            total_sold: p.total_sold,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryRevenueResponse {
    /// None when the product behind the revenue was deleted from the catalog.
    pub category: Option<String>,
    pub revenue: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SalesAnalyticsResponse {
    pub total_revenue: String,
    pub completed_orders: i64,
    pub category_breakdown: Vec<CategoryRevenueResponse>,
}

impl From<SalesAnalytics> for SalesAnalyticsResponse {
    fn from(a: SalesAnalytics) -> Self {
        SalesAnalyticsResponse {
            total_revenue: a.total_revenue.to_string(),
            completed_orders: a.completed_orders,
            category_breakdown: a
                .category_breakdown
                .into_iter()
                .map(|c: CategoryRevenue| CategoryRevenueResponse {
                    category: c.category,
                    revenue: c.revenue.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
    pub total_count: i64,
}

// ── Query parameters ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct TopProductsParams {
    /// Number of products to return. Defaults to 10, maximum 100.
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SalesAnalyticsParams {
    /// Inclusive start of the range, RFC 3339.
    pub start_date: DateTime<Utc>,
    /// Inclusive end of the range, RFC 3339.
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomerOrdersParams {
    /// Page size. Defaults to 10, maximum 100.
    pub limit: Option<i64>,
    /// Number of orders to skip. Defaults to 0.
    pub offset: Option<i64>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /analytics/customers/{customer_id}/spending
#[utoipa::path(
    get,
    path = "/analytics/customers/{customer_id}/spending",
    params(
        ("customer_id" = Uuid, Path, description = "Customer UUID"),
    ),
    responses(
        (status = 200, description = "Spending summary", body = CustomerSpendingResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "analytics"
)]
pub async fn customer_spending(
    service: web::Data<AppAnalyticsService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();

    let spending = web::block(move || service.customer_spending(customer_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CustomerSpendingResponse::from(spending)))
}

/// GET /analytics/products/top
#[utoipa::path(
    get,
    path = "/analytics/products/top",
    params(
        ("limit" = Option<i64>, Query, description = "Number of products (default 10, max 100)"),
    ),
    responses(
        (status = 200, description = "Best-selling products by units sold", body = [TopProductResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "analytics"
)]
pub async fn top_selling_products(
    service: web::Data<AppAnalyticsService>,
    query: web::Query<TopProductsParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();

    let products = web::block(move || service.top_selling_products(params.limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let response: Vec<TopProductResponse> =
        products.into_iter().map(TopProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /analytics/sales
///
/// Date-range sales summary, served from the cache when a result for the
/// same range is fresher than the TTL.
#[utoipa::path(
    get,
    path = "/analytics/sales",
    params(
        ("start_date" = String, Query, description = "Inclusive range start, RFC 3339"),
        ("end_date" = String, Query, description = "Inclusive range end, RFC 3339"),
    ),
    responses(
        (status = 200, description = "Sales summary with category breakdown", body = SalesAnalyticsResponse),
        (status = 400, description = "Malformed or inverted date range"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "analytics"
)]
pub async fn sales_analytics(
    service: web::Data<AppAnalyticsService>,
    query: web::Query<SalesAnalyticsParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();

    let analytics =
        web::block(move || service.sales_analytics(params.start_date, params.end_date))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(SalesAnalyticsResponse::from(analytics)))
}

/// GET /customers/{customer_id}/orders
///
/// Most recent orders first; `total_count` is independent of the page window.
#[utoipa::path(
    get,
    path = "/customers/{customer_id}/orders",
    params(
        ("customer_id" = Uuid, Path, description = "Customer UUID"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10, max 100)"),
        ("offset" = Option<i64>, Query, description = "Orders to skip (default 0)"),
    ),
    responses(
        (status = 200, description = "One page of the customer's orders", body = OrderListResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "analytics"
)]
pub async fn customer_orders(
    service: web::Data<AppAnalyticsService>,
    path: web::Path<Uuid>,
    query: web::Query<CustomerOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();
    let params = query.into_inner();

    let page =
        web::block(move || service.customer_orders(customer_id, params.limit, params.offset))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderListResponse {
        total_count: page.total_count,
        orders: page.orders.into_iter().map(OrderResponse::from).collect(),
    }))
}
