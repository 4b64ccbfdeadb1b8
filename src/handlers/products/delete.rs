// DELETE /api/products/:id (admin)
use axum::extract::{Path, State};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::Product;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn delete(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Value> {
    let id = parse_id(&id, "product")?;
    if !Repository::<Product>::new("products", pool).delete_by_id(id).await? {
        return Err(ApiError::not_found("Product not found"));
    }
    Ok(ApiResponse::success(json!({ "msg": "Product deleted successfully" })))
}
