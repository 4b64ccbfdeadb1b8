// PUT /api/cart/update
use axum::extract::{Extension, State};
use axum::Json;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::Cart;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::validation::{self, rules};

use super::add::CartItemRequest;

/// Set the quantity of one line item in the authenticated user's cart.
pub async fn update(
    State(pool): State<PgPool>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> ApiResult<Value> {
    validation::validate(&body, rules::CART_UPDATE)?;
    let req: CartItemRequest =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let mut cart = Cart::find_by_user(&pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Cart not found"))?;

    if !cart.set_item_quantity(req.product_id, req.quantity) {
        return Err(ApiError::not_found("Product not found in cart"));
    }
    cart.save(&pool).await?;

    Ok(ApiResponse::success(json!({ "msg": "Cart updated successfully" })))
}
