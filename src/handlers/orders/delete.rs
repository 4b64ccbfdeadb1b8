// DELETE /api/orders/:id
use axum::extract::{Path, State};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::Order;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn delete(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Value> {
    let id = parse_id(&id, "order")?;
    if !Repository::<Order>::new("orders", pool).delete_by_id(id).await? {
        return Err(ApiError::not_found("Order not found"));
    }
    Ok(ApiResponse::success(json!({ "msg": "Order deleted successfully" })))
}
