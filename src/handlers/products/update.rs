// PUT /api/products/:id (admin)
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::{Product, ProductPatch};
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation::{self, rules};

/// Merge the supplied fields into the product. Falsy values keep the stored
/// value: `{"price": 0}` leaves the price alone, `{"price": 0.01}` updates it.
pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Value> {
    let id = parse_id(&id, "product")?;
    validation::validate(&body, rules::PRODUCT_UPDATE)?;
    let patch: ProductPatch =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let repo = Repository::<Product>::new("products", pool.clone());
    let mut product = repo.find_by_id_404(id, "Product").await?;

    product.apply_patch(&patch);
    product.save(&pool).await?;

    Ok(ApiResponse::success(json!({ "msg": "Product updated successfully" })))
}
