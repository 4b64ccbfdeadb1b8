// PUT /api/users/profile
use axum::extract::{Extension, State};
use axum::Json;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::models::{ProfilePatch, User};
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::validation::{self, rules};

/// Update the authenticated user's profile. Only present-and-truthy fields
/// overwrite; an empty string keeps the stored value.
pub async fn update_profile(
    State(pool): State<PgPool>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> ApiResult<Value> {
    validation::validate(&body, rules::PROFILE_UPDATE)?;
    let patch: ProfilePatch =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let repo = Repository::<User>::new("users", pool.clone());
    let mut user = repo.find_by_id_404(auth.user_id, "User").await?;

    user.apply_profile_patch(&patch);
    user.save(&pool).await?;

    Ok(ApiResponse::success(json!({ "msg": "Profile updated successfully" })))
}
