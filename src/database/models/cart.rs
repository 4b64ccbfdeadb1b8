use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// A (product, quantity) pair inside a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// One cart per user, created lazily on the first add. Line items live in a
/// single JSONB document that is read, modified in memory and written back
/// wholesale; concurrent writers are last-write-wins.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: Uuid,
    pub user_id: Uuid,
    pub products: Json<Vec<CartItem>>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Cart>, DatabaseError> {
        let cart = sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(cart)
    }

    pub async fn insert(
        pool: &PgPool,
        user_id: Uuid,
        products: Vec<CartItem>,
    ) -> Result<Cart, DatabaseError> {
        let cart = sqlx::query_as::<_, Cart>(
            "INSERT INTO carts (user_id, products) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(Json(products))
        .fetch_one(pool)
        .await?;
        Ok(cart)
    }

    /// Write the whole line-item document back
    pub async fn save(&self, pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("UPDATE carts SET products = $1, updated_at = now() WHERE id = $2")
            .bind(&self.products)
            .bind(self.id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Merge a quantity into an existing line item for the product, or append
    /// a new line item. A product appears at most once.
    pub fn add_item(&mut self, product_id: Uuid, quantity: i32) {
        match self.products.0.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity += quantity,
            None => self.products.0.push(CartItem {
                product_id,
                quantity,
            }),
        }
    }

    /// Set the quantity of the line item for the product; false when no such
    /// line item exists.
    pub fn set_item_quantity(&mut self, product_id: Uuid, quantity: i32) -> bool {
        match self.products.0.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Drop the line item for the product; false when no such line item
    /// exists (the cart is left unchanged).
    pub fn remove_item(&mut self, product_id: Uuid) -> bool {
        let before = self.products.0.len();
        self.products.0.retain(|i| i.product_id != product_id);
        self.products.0.len() != before
    }
}
