// PUT /api/orders/:id
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::{Order, OrderPatch};
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation::{self, rules};

/// Merge the supplied fields into the order; falsy values keep the stored
/// value.
pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Value> {
    let id = parse_id(&id, "order")?;
    validation::validate(&body, rules::ORDER_UPDATE)?;
    let patch: OrderPatch =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let repo = Repository::<Order>::new("orders", pool.clone());
    let mut order = repo.find_by_id_404(id, "Order").await?;

    order.apply_patch(&patch);
    order.save(&pool).await?;

    Ok(ApiResponse::success(json!({ "msg": "Order updated successfully" })))
}
