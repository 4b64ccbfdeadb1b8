use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// bcrypt hash; never serialized into responses
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Already hashed by the caller
    pub password: String,
}

/// Profile fields a user may change. A field that is present but empty keeps
/// the stored value; only present-and-truthy fields overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl User {
    pub async fn insert(pool: &PgPool, new_user: NewUser) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Persist the full mutable state of this user
    pub async fn save(&self, pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = $1, email = $2, password = $3, address = $4, phone = $5,
                active = $6, updated_at = now()
            WHERE id = $7
            "#,
        )
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.password)
        .bind(&self.address)
        .bind(&self.phone)
        .bind(self.active)
        .bind(self.id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Flip the active flag; reports whether the user existed.
    pub async fn set_active(pool: &PgPool, id: Uuid, active: bool) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE users SET active = $1, updated_at = now() WHERE id = $2")
            .bind(active)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub fn apply_profile_patch(&mut self, patch: &ProfilePatch) {
        if let Some(name) = patch.name.as_deref().filter(|s| !s.is_empty()) {
            self.name = name.to_string();
        }
        if let Some(email) = patch.email.as_deref().filter(|s| !s.is_empty()) {
            self.email = email.to_string();
        }
        if let Some(address) = patch.address.as_deref().filter(|s| !s.is_empty()) {
            self.address = Some(address.to_string());
        }
        if let Some(phone) = patch.phone.as_deref().filter(|s| !s.is_empty()) {
            self.phone = Some(phone.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "$2b$10$hash".to_string(),
            role: "user".to_string(),
            address: Some("1 Analytical Way".to_string()),
            phone: None,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn patch_overwrites_present_fields() {
        let mut user = sample_user();
        user.apply_profile_patch(&ProfilePatch {
            name: Some("Ada Lovelace".to_string()),
            phone: Some("+44 20 7946 0000".to_string()),
            ..Default::default()
        });
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.phone.as_deref(), Some("+44 20 7946 0000"));
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn empty_string_keeps_stored_value() {
        let mut user = sample_user();
        user.apply_profile_patch(&ProfilePatch {
            name: Some(String::new()),
            address: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(user.name, "Ada");
        assert_eq!(user.address.as_deref(), Some("1 Analytical Way"));
    }

    #[test]
    fn password_hash_never_serializes() {
        let user = sample_user();
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "ada@example.com");
    }
}
