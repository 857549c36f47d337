use crate::auth::token::issue_token;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, Json};
use printdock_core::{
    models::{LoginResponse, RegisterResponse},
    AppError,
};
use printdock_db::UserStore;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid email/password or email taken", body = ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, HttpAppError> {
    let email = req.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::InvalidInput("Invalid email address".to_string()).into());
    }
    if req.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ))
        .into());
    }

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

    let user = state.users.create_user(email, &password_hash).await?;
    tracing::info!(user_id = %user.id, "User registered");

    Ok(Json(RegisterResponse {
        id: user.id,
        email: user.email,
        message: "User registered successfully".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpAppError> {
    // One failure message for unknown email and wrong password alike
    let invalid = || AppError::Unauthorized("Invalid email or password".to_string());

    let user = state
        .users
        .get_by_email(req.email.trim())
        .await?
        .ok_or_else(invalid)?;

    let verified = bcrypt::verify(&req.password, &user.password_hash).unwrap_or(false);
    if !verified {
        return Err(invalid().into());
    }

    let token = issue_token(
        &state.config.jwt_secret,
        user.id,
        state.config.jwt_expiry_hours,
    )?;

    Ok(Json(LoginResponse::bearer(token)))
}
