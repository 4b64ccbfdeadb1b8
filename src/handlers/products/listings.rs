// Public catalog listings. The full list and keyword search are unbounded;
// the related/similar listings cap their result count.
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::config;
use crate::database::models::Product;
use crate::database::repository::Repository;
use crate::filter::FilterData;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}

/// GET /api/products - the whole catalog
pub async fn list(State(pool): State<PgPool>) -> ApiResult<Vec<Product>> {
    let products = Repository::<Product>::new("products", pool)
        .select_any(FilterData::default())
        .await?;
    Ok(ApiResponse::success(products))
}

/// GET /api/products/search?keyword= - case-insensitive match over name and
/// description
pub async fn search(
    State(pool): State<PgPool>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<Product>> {
    let keyword = query.keyword.unwrap_or_default();
    let pattern = format!("%{}%", escape_like(&keyword));

    let products = Repository::<Product>::new("products", pool)
        .select_any(FilterData {
            where_clause: Some(json!({
                "$or": [
                    { "name": { "$ilike": pattern } },
                    { "description": { "$ilike": pattern } }
                ]
            })),
            ..Default::default()
        })
        .await?;
    Ok(ApiResponse::success(products))
}

/// GET /api/products/categories - distinct categories in the catalog
pub async fn categories(State(pool): State<PgPool>) -> ApiResult<Vec<String>> {
    let categories = Product::distinct_categories(&pool).await?;
    Ok(ApiResponse::success(categories))
}

/// GET /api/products/category/:category/related - capped listing of one
/// category
pub async fn related(
    State(pool): State<PgPool>,
    Path(category): Path<String>,
) -> ApiResult<Vec<Product>> {
    let products = Repository::<Product>::new("products", pool)
        .select_any(FilterData {
            where_clause: Some(json!({ "category": category })),
            limit: Some(config::config().filter.listing_cap),
            ..Default::default()
        })
        .await?;
    Ok(ApiResponse::success(products))
}

/// GET /api/products/:id/similar - capped listing sharing the anchor
/// product's category, excluding the anchor itself
pub async fn similar(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Vec<Product>> {
    let id = parse_id(&id, "product")?;
    let anchor = Repository::<Product>::new("products", pool.clone())
        .find_by_id_404(id, "Product")
        .await?;

    let products = anchor
        .similar(&pool, config::config().filter.listing_cap)
        .await?;
    Ok(ApiResponse::success(products))
}

/// LIKE/ILIKE treat %, _ and \ specially; search keywords are literal text
fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("mug"), "mug");
    }
}
