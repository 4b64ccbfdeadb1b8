// GET /api/products/:id (public)
use axum::extract::{Path, State};
use sqlx::PgPool;

use crate::database::models::Product;
use crate::database::repository::Repository;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn get_one(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;
    let product = Repository::<Product>::new("products", pool)
        .find_by_id_404(id, "Product")
        .await?;
    Ok(ApiResponse::success(product))
}
