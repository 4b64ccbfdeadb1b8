// Order read endpoints: the order itself plus its status, payment status,
// computed total and invoice projections.
use axum::extract::{Path, State};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::Order;
use crate::database::repository::Repository;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/orders/:id
pub async fn get_one(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Order> {
    let order = find_order(&pool, &id).await?;
    Ok(ApiResponse::success(order))
}

/// GET /api/orders/user/:userId
pub async fn list_by_user(
    State(pool): State<PgPool>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<Order>> {
    let user_id = parse_id(&user_id, "user")?;
    let orders = Order::find_by_user(&pool, user_id).await?;
    Ok(ApiResponse::success(orders))
}

/// GET /api/orders/:id/status
pub async fn get_status(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Value> {
    let order = find_order(&pool, &id).await?;
    Ok(ApiResponse::success(json!({ "status": order.status })))
}

/// GET /api/orders/:id/payment-status
pub async fn get_payment_status(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let order = find_order(&pool, &id).await?;
    Ok(ApiResponse::success(json!({ "paymentStatus": order.payment_status })))
}

/// GET /api/orders/:id/total - total recomputed from the line items, exposed
/// next to the stored caller-supplied totalPrice
pub async fn get_total(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Value> {
    let order = find_order(&pool, &id).await?;
    Ok(ApiResponse::success(json!({ "total": order.computed_total() })))
}

/// GET /api/orders/:id/invoice
pub async fn invoice(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Value> {
    let order = find_order(&pool, &id).await?;
    Ok(ApiResponse::success(order.invoice()))
}

async fn find_order(pool: &PgPool, raw_id: &str) -> Result<Order, crate::error::ApiError> {
    let id = parse_id(raw_id, "order")?;
    let order = Repository::<Order>::new("orders", pool.clone())
        .find_by_id_404(id, "Order")
        .await?;
    Ok(order)
}
