use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity_available: i32,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity_available: i32,
    pub category: Option<String>,
}

/// Catalog fields an admin may change. Falsy values (empty string, zero)
/// keep the stored value; only present-and-truthy fields overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity_available: Option<i32>,
    pub category: Option<String>,
}

impl Product {
    pub async fn insert(pool: &PgPool, new_product: NewProduct) -> Result<Product, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, quantity_available, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.price)
        .bind(new_product.quantity_available)
        .bind(&new_product.category)
        .fetch_one(pool)
        .await?;
        Ok(product)
    }

    /// Persist the full mutable state of this product
    pub async fn save(&self, pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            UPDATE products
            SET name = $1, description = $2, price = $3, quantity_available = $4,
                category = $5, updated_at = now()
            WHERE id = $6
            "#,
        )
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.price)
        .bind(self.quantity_available)
        .bind(&self.category)
        .bind(self.id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<String>, DatabaseError> {
        let categories: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT category FROM products WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(pool)
        .await?;
        Ok(categories)
    }

    /// Products sharing this product's category, excluding itself. Empty when
    /// the product is uncategorized.
    pub async fn similar(&self, pool: &PgPool, cap: i32) -> Result<Vec<Product>, DatabaseError> {
        let category = match &self.category {
            Some(c) => c,
            None => return Ok(vec![]),
        };
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE category = $1 AND id <> $2 LIMIT $3",
        )
        .bind(category)
        .bind(self.id)
        .bind(cap as i64)
        .fetch_all(pool)
        .await?;
        Ok(products)
    }

    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = patch.name.as_deref().filter(|s| !s.is_empty()) {
            self.name = name.to_string();
        }
        if let Some(description) = patch.description.as_deref().filter(|s| !s.is_empty()) {
            self.description = description.to_string();
        }
        if let Some(price) = patch.price.filter(|p| *p != 0.0) {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity_available.filter(|q| *q != 0) {
            self.quantity_available = quantity;
        }
        if let Some(category) = patch.category.as_deref().filter(|s| !s.is_empty()) {
            self.category = Some(category.to_string());
        }
    }
}
