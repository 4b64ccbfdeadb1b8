use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::repository::Repository;
use crate::filter::FilterData;

/// A (product, quantity, price) snapshot inside an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub products: Json<Vec<OrderItem>>,
    /// Caller-supplied at checkout; not recomputed from the line items
    pub total_price: f64,
    pub shipping_address: String,
    pub payment_method: String,
    pub status: String,
    pub payment_status: String,
    pub shipping_status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub products: Vec<OrderItem>,
    pub total_price: f64,
    pub shipping_address: String,
    pub payment_method: String,
}

/// Order fields a caller may change. Falsy values keep the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    #[serde(rename = "user")]
    pub user_id: Option<Uuid>,
    pub products: Option<Vec<OrderItem>>,
    pub total_price: Option<f64>,
    pub shipping_address: Option<String>,
    pub payment_method: Option<String>,
}

/// The three independent status-like columns. Writes are unconditional
/// overwrites; no transition legality check exists.
#[derive(Debug, Clone, Copy)]
pub enum StatusField {
    Status,
    PaymentStatus,
    ShippingStatus,
}

impl StatusField {
    fn column(self) -> &'static str {
        match self {
            StatusField::Status => "status",
            StatusField::PaymentStatus => "payment_status",
            StatusField::ShippingStatus => "shipping_status",
        }
    }
}

impl Order {
    pub async fn insert(pool: &PgPool, new_order: NewOrder) -> Result<Order, DatabaseError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id, products, total_price, shipping_address, payment_method)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new_order.user_id)
        .bind(Json(new_order.products))
        .bind(new_order.total_price)
        .bind(&new_order.shipping_address)
        .bind(&new_order.payment_method)
        .fetch_one(pool)
        .await?;
        Ok(order)
    }

    pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Order>, DatabaseError> {
        Repository::<Order>::new("orders", pool.clone())
            .select_any(FilterData {
                where_clause: Some(json!({ "user_id": user_id })),
                ..Default::default()
            })
            .await
    }

    /// Persist the full mutable state of this order
    pub async fn save(&self, pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            UPDATE orders
            SET user_id = $1, products = $2, total_price = $3, shipping_address = $4,
                payment_method = $5, status = $6, payment_status = $7, shipping_status = $8
            WHERE id = $9
            "#,
        )
        .bind(self.user_id)
        .bind(&self.products)
        .bind(self.total_price)
        .bind(&self.shipping_address)
        .bind(&self.payment_method)
        .bind(&self.status)
        .bind(&self.payment_status)
        .bind(&self.shipping_status)
        .bind(self.id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Overwrite one status column and return the updated order; None when
    /// the order does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: Uuid,
        field: StatusField,
        value: &str,
    ) -> Result<Option<Order>, DatabaseError> {
        let sql = format!(
            "UPDATE orders SET {} = $1 WHERE id = $2 RETURNING *",
            field.column()
        );
        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(value)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(order)
    }

    pub fn apply_patch(&mut self, patch: &OrderPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(products) = patch.products.as_ref().filter(|p| !p.is_empty()) {
            self.products = Json(products.clone());
        }
        if let Some(total_price) = patch.total_price.filter(|t| *t != 0.0) {
            self.total_price = total_price;
        }
        if let Some(addr) = patch.shipping_address.as_deref().filter(|s| !s.is_empty()) {
            self.shipping_address = addr.to_string();
        }
        if let Some(method) = patch.payment_method.as_deref().filter(|s| !s.is_empty()) {
            self.payment_method = method.to_string();
        }
    }

    /// Total computed from the line items, as opposed to the stored
    /// caller-supplied total_price
    pub fn computed_total(&self) -> f64 {
        self.products
            .0
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum()
    }

    /// Invoice projection of this order
    pub fn invoice(&self) -> serde_json::Value {
        json!({
            "orderId": self.id,
            "user": self.user_id,
            "totalPrice": self.total_price,
            "products": self.products.0,
            "shippingAddress": self.shipping_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            products: Json(vec![
                OrderItem {
                    product_id: Uuid::new_v4(),
                    quantity: 2,
                    price: 10.0,
                },
                OrderItem {
                    product_id: Uuid::new_v4(),
                    quantity: 1,
                    price: 5.5,
                },
            ]),
            total_price: 25.5,
            shipping_address: "1 Main St".to_string(),
            payment_method: "card".to_string(),
            status: "pending".to_string(),
            payment_status: "pending".to_string(),
            shipping_status: "processing".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn computed_total_sums_quantity_times_price() {
        let order = sample_order();
        assert!((order.computed_total() - 25.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_total_price_keeps_stored_total() {
        let mut order = sample_order();
        order.apply_patch(&OrderPatch {
            total_price: Some(0.0),
            ..Default::default()
        });
        assert_eq!(order.total_price, 25.5);
    }

    #[test]
    fn patch_overwrites_truthy_fields() {
        let mut order = sample_order();
        order.apply_patch(&OrderPatch {
            shipping_address: Some("2 Side St".to_string()),
            total_price: Some(30.0),
            ..Default::default()
        });
        assert_eq!(order.shipping_address, "2 Side St");
        assert_eq!(order.total_price, 30.0);
        assert_eq!(order.payment_method, "card");
    }

    #[test]
    fn empty_products_list_keeps_stored_items() {
        let mut order = sample_order();
        order.apply_patch(&OrderPatch {
            products: Some(vec![]),
            ..Default::default()
        });
        assert_eq!(order.products.0.len(), 2);
    }

    #[test]
    fn invoice_projects_the_expected_fields() {
        let order = sample_order();
        let invoice = order.invoice();
        assert_eq!(invoice["orderId"], json!(order.id));
        assert_eq!(invoice["totalPrice"], json!(25.5));
        assert!(invoice.get("paymentMethod").is_none());
    }
}
