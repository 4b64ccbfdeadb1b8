// DELETE /api/users/account
use axum::extract::{Extension, State};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::User;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// Delete the authenticated user's account. Orders keep their user reference
/// as a snapshot; only the user document goes away.
pub async fn delete_account(
    State(pool): State<PgPool>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Value> {
    let repo = Repository::<User>::new("users", pool);
    if !repo.delete_by_id(auth.user_id).await? {
        return Err(ApiError::not_found("User not found"));
    }

    tracing::info!("Deleted user account {}", auth.user_id);
    Ok(ApiResponse::success(json!({ "msg": "User account deleted successfully" })))
}
