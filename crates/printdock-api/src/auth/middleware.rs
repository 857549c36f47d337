use crate::auth::token::verify_token;
use crate::error::HttpAppError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use printdock_core::{models::User, AppError};
use printdock_db::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    pub jwt_secret: String,
    pub users: Arc<dyn UserStore>,
}

/// The authenticated account for this request, inserted by `auth_middleware`.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Resolve `Authorization: Bearer <jwt>` to a `User` row and attach it to the
/// request. A valid token naming a since-deleted user is rejected the same way
/// as an invalid token.
pub async fn auth_middleware(
    State(auth): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, HttpAppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    let user_id = verify_token(&auth.jwt_secret, token)?;

    let user = auth
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Missing authentication".to_string()).into())
    }
}
