// POST /api/users/login
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::auth::password::verify_password;
use crate::auth::{generate_jwt, Claims};
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation::{self, rules};

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// Exchange credentials for a token. Unknown email and wrong password
/// produce the identical response so neither field is confirmed to a guesser.
pub async fn login(State(pool): State<PgPool>, Json(body): Json<Value>) -> ApiResult<Value> {
    validation::validate(&body, rules::LOGIN)?;
    let req: LoginRequest =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let user = match User::find_by_email(&pool, &req.email).await? {
        Some(user) => user,
        None => return Err(ApiError::bad_request("Invalid credentials")),
    };

    if !verify_password(&req.password, &user.password)? {
        return Err(ApiError::bad_request("Invalid credentials"));
    }

    let token = generate_jwt(&Claims::new(user.id, user.role.clone()))?;
    Ok(ApiResponse::success(json!({ "token": token })))
}
