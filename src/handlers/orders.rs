use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{OrderItem, OrderLineView, OrderView};
use crate::errors::AppError;
use crate::AppOrderService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    pub customer_id: Uuid,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price_at_purchase: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub total_amount: String,
    pub order_date: String,
    pub lines: Vec<OrderLineResponse>,
}

impl From<OrderLineView> for OrderLineResponse {
    fn from(l: OrderLineView) -> Self {
        OrderLineResponse {
            id: l.id,
            product_id: l.product_id,
            quantity: l.quantity,
            price_at_purchase: l.price_at_purchase.to_string(),
        }
    }
}

impl From<OrderView> for OrderResponse {
    fn from(o: OrderView) -> Self {
        OrderResponse {
            id: o.id,
            customer_id: o.customer_id,
            status: o.status,
            total_amount: o.total_amount.to_string(),
            order_date: o.order_date.to_rfc3339(),
            lines: o.lines.into_iter().map(OrderLineResponse::from).collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Places an order: validates the requested items, snapshots prices,
/// decrements stock and inserts the order in one transaction. Stock is never
/// left partially decremented on failure.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Empty order or non-positive quantity"),
        (status = 404, description = "Unknown product id"),
        (status = 409, description = "Insufficient stock"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    service: web::Data<AppOrderService>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let items: Vec<OrderItem> = body
        .items
        .iter()
        .map(|i| OrderItem {
            product_id: i.product_id,
            quantity: i.quantity,
        })
        .collect();

    let order = web::block(move || service.place_order(body.customer_id, items))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /orders/{id}
///
/// Returns the order together with its line items in placement order.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let result = web::block(move || service.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match result {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(DomainError::OrderNotFound.into()),
    }
}
