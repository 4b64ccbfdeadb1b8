// DELETE /api/cart/remove
use axum::extract::{Extension, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Cart;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::validation::{self, rules};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartRemoveRequest {
    product_id: Uuid,
}

/// Drop one line item from the authenticated user's cart. Removing a product
/// that is not in the cart is a 404 and leaves the cart unchanged.
pub async fn remove(
    State(pool): State<PgPool>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> ApiResult<Value> {
    validation::validate(&body, rules::CART_REMOVE)?;
    let req: CartRemoveRequest =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let mut cart = Cart::find_by_user(&pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Cart not found"))?;

    if !cart.remove_item(req.product_id) {
        return Err(ApiError::not_found("Product not found in cart"));
    }
    cart.save(&pool).await?;

    Ok(ApiResponse::success(json!({ "msg": "Product removed from cart successfully" })))
}
