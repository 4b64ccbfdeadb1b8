// POST /api/products (admin)
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::{NewProduct, Product};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation::{self, rules};

pub async fn create(State(pool): State<PgPool>, Json(body): Json<Value>) -> ApiResult<Value> {
    validation::validate(&body, rules::PRODUCT_CREATE)?;
    let req: NewProduct =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let product = Product::insert(&pool, req).await?;
    tracing::info!("Created product {}", product.id);

    Ok(ApiResponse::created(json!({ "msg": "Product created successfully" })))
}
