// Order status transitions. Every write is an unconditional overwrite of one
// status column; any status is reachable from any status.
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use crate::database::models::{Order, StatusField};
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
struct StatusRequest {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShippingStatusRequest {
    shipping_status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentStatusRequest {
    payment_status: Option<String>,
}

/// PUT /api/orders/:id/cancel
pub async fn cancel(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Order> {
    overwrite(&pool, &id, StatusField::Status, "cancelled").await
}

/// PUT /api/orders/:id/deliver
pub async fn deliver(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Order> {
    overwrite(&pool, &id, StatusField::Status, "delivered").await
}

/// PUT /api/orders/:id/status
pub async fn set_status(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Order> {
    let req: StatusRequest =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let status = req
        .status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("Status is required"))?;
    overwrite(&pool, &id, StatusField::Status, &status).await
}

/// PUT /api/orders/:id/shipping-status
pub async fn set_shipping_status(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Order> {
    let req: ShippingStatusRequest =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let status = req
        .shipping_status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("Shipping status is required"))?;
    overwrite(&pool, &id, StatusField::ShippingStatus, &status).await
}

/// PUT /api/orders/:id/payment-status
pub async fn set_payment_status(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Order> {
    let req: PaymentStatusRequest =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let status = req
        .payment_status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("Payment status is required"))?;
    overwrite(&pool, &id, StatusField::PaymentStatus, &status).await
}

async fn overwrite(
    pool: &PgPool,
    raw_id: &str,
    field: StatusField,
    value: &str,
) -> ApiResult<Order> {
    let id = parse_id(raw_id, "order")?;
    let order = Order::set_status(pool, id, field, value)
        .await?
        .ok_or_else(|| ApiError::not_found("Order not found"))?;
    Ok(ApiResponse::success(order))
}
