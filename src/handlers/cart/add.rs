// POST /api/cart/add
use axum::extract::{Extension, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{Cart, CartItem};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::validation::{self, rules};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CartItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Add a product to the authenticated user's cart. The cart is created
/// lazily on the first add; re-adding a product merges quantities into its
/// existing line item.
pub async fn add(
    State(pool): State<PgPool>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> ApiResult<Value> {
    validation::validate(&body, rules::CART_ADD)?;
    let req: CartItemRequest =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    match Cart::find_by_user(&pool, auth.user_id).await? {
        Some(mut cart) => {
            cart.add_item(req.product_id, req.quantity);
            cart.save(&pool).await?;
        }
        None => {
            let items = vec![CartItem {
                product_id: req.product_id,
                quantity: req.quantity,
            }];
            Cart::insert(&pool, auth.user_id, items).await?;
        }
    }

    Ok(ApiResponse::success(json!({ "msg": "Product added to cart successfully" })))
}
