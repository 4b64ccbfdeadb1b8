// POST /api/orders
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::{NewOrder, Order};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation::{self, rules};

/// Create an order at checkout. The total is taken from the caller as-is and
/// is not recomputed from the line items.
pub async fn create(State(pool): State<PgPool>, Json(body): Json<Value>) -> ApiResult<Value> {
    validation::validate(&body, rules::ORDER_CREATE)?;
    let req: NewOrder =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let order = Order::insert(&pool, req).await?;
    tracing::info!("Created order {} for user {}", order.id, order.user_id);

    Ok(ApiResponse::created(json!({ "msg": "Order created successfully" })))
}
