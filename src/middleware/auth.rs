use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::{validate_jwt, Claims};
use crate::error::ApiError;

/// Token travels in a custom header, not `Authorization`
pub const AUTH_HEADER: &str = "x-auth-token";

/// Authenticated identity extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}

/// Authentication middleware: any verified token passes, and the identity is
/// injected into request extensions for downstream handlers.
pub async fn require_user(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = authenticate(&headers)?;
    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

/// Authentication middleware for admin-only routes. A verified token without
/// the admin role is rejected with 401, same as a missing one.
pub async fn require_admin(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = authenticate(&headers)?;
    if !claims.is_admin() {
        tracing::warn!("Admin route refused for user {}", claims.user_id);
        return Err(ApiError::unauthorized("Unauthorized access"));
    }
    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

fn authenticate(headers: &HeaderMap) -> Result<Claims, ApiError> {
    let token = extract_token(headers)?;
    validate_jwt(&token).map_err(|e| {
        tracing::debug!("Token rejected: {}", e);
        ApiError::unauthorized("Token is not valid")
    })
}

fn extract_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let header = headers
        .get(AUTH_HEADER)
        .ok_or_else(|| ApiError::unauthorized("No token, authorization denied"))?;

    let token = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Token is not valid"))?
        .trim();

    if token.is_empty() {
        return Err(ApiError::unauthorized("No token, authorization denied"));
    }
    Ok(token.to_string())
}
