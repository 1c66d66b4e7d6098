//! Authentication Handlers
//!
//! Register, login and current-user lookup

use std::time::Duration;

use axum::{Json, extract::State};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::{AppError, AppResult};
use shared::client::{AuthResponse, LoginRequest, RegisterRequest};
use shared::models::{User, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/register - create an account and log in
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    req.validate()?;

    if user::find_by_email(&state.pool, &req.email).await?.is_some() {
        return Err(AppError::conflict("An account with this email already exists"));
    }

    let hash = User::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let created = user::create(&state.pool, req.name, req.email, req.image, &hash).await?;

    let token = state
        .jwt_service
        .generate_token(created.id, &created.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = created.id, email = %created.email, "Account registered");

    Ok(Json(AuthResponse {
        token,
        user: created.into(),
    }))
}

/// POST /api/auth/login
///
/// Unified error message and a fixed delay keep invalid-email and
/// invalid-password responses indistinguishable.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let account = user::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let account = match account {
        Some(u) => u,
        None => {
            tracing::warn!(email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let password_valid = account
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

    if !password_valid {
        tracing::warn!(email = %req.email, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(account.id, &account.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = account.id, email = %account.email, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: account.into(),
    }))
}

/// GET /api/auth/me - current account info
pub async fn me(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<UserInfo>> {
    let account = user::find_by_id(&state.pool, current_user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", current_user.id)))?;
    Ok(Json(account.into()))
}
