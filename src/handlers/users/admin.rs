// Admin-only user management: GET /api/users, GET /api/users/:id,
// PUT /api/users/:id/activate, PUT /api/users/:id/deactivate
use axum::extract::{Path, State};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::User;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::filter::FilterData;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};

pub async fn list(State(pool): State<PgPool>) -> ApiResult<Vec<User>> {
    let users = Repository::<User>::new("users", pool)
        .select_any(FilterData::default())
        .await?;
    Ok(ApiResponse::success(users))
}

pub async fn get_one(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<User> {
    let id = parse_id(&id, "user")?;
    let user = Repository::<User>::new("users", pool)
        .find_by_id_404(id, "User")
        .await?;
    Ok(ApiResponse::success(user))
}

pub async fn activate(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Value> {
    set_active(&pool, &id, true).await?;
    Ok(ApiResponse::success(json!({ "msg": "User account activated successfully" })))
}

pub async fn deactivate(State(pool): State<PgPool>, Path(id): Path<String>) -> ApiResult<Value> {
    set_active(&pool, &id, false).await?;
    Ok(ApiResponse::success(json!({ "msg": "User account deactivated successfully" })))
}

async fn set_active(pool: &PgPool, raw_id: &str, active: bool) -> Result<(), ApiError> {
    let id = parse_id(raw_id, "user")?;
    if !User::set_active(pool, id, active).await? {
        return Err(ApiError::not_found("User not found"));
    }
    Ok(())
}
