// POST /api/users/register
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::auth::{generate_jwt, Claims};
use crate::database::models::{NewUser, User};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation::{self, rules};

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

/// Register a new account and hand back a token so the client is logged in
/// immediately.
pub async fn register(State(pool): State<PgPool>, Json(body): Json<Value>) -> ApiResult<Value> {
    validation::validate(&body, rules::REGISTER)?;
    let req: RegisterRequest =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    if User::find_by_email(&pool, &req.email).await?.is_some() {
        return Err(ApiError::conflict("User already exists"));
    }

    let hashed = hash_password(&req.password)?;
    let user = User::insert(
        &pool,
        NewUser {
            name: req.name,
            email: req.email,
            password: hashed,
        },
    )
    .await?;

    tracing::info!("Registered user {}", user.id);

    let token = generate_jwt(&Claims::new(user.id, user.role.clone()))?;
    Ok(ApiResponse::created(json!({ "token": token })))
}
