// PUT /api/users/password
use axum::extract::{Extension, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_password};
use crate::database::models::User;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::validation::{self, rules};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChangeRequest {
    old_password: String,
    new_password: String,
}

pub async fn change_password(
    State(pool): State<PgPool>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> ApiResult<Value> {
    validation::validate(&body, rules::PASSWORD_CHANGE)?;
    let req: PasswordChangeRequest =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let repo = Repository::<User>::new("users", pool.clone());
    let mut user = repo.find_by_id_404(auth.user_id, "User").await?;

    if !verify_password(&req.old_password, &user.password)? {
        return Err(ApiError::bad_request("Invalid old password"));
    }

    user.password = hash_password(&req.new_password)?;
    user.save(&pool).await?;

    Ok(ApiResponse::success(json!({ "msg": "Password updated successfully" })))
}
