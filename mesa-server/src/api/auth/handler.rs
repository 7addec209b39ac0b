//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::models::{AuthResponse, LoginRequest, RegisterRequest, User, UserInfo};
use shared::util::{new_id, now_millis};
use validator::Validate;

use crate::auth::{CurrentUser, hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::validation::validate_not_blank;
use crate::utils::{AppError, AppResult};
use crate::security_log;

/// Fixed delay for failed logins to blunt timing probes
const AUTH_FAILURE_DELAY_MS: u64 = 300;

fn issue(state: &ServerState, user: &User) -> AppResult<AuthResponse> {
    let token = state
        .get_jwt_service()
        .generate_token(user)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    Ok(AuthResponse {
        token,
        user: UserInfo::from(user),
    })
}

/// POST /api/auth/register - 注册管理员账号
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    req.validate()?;
    validate_not_blank(&req.name, "name")?;

    let user = User {
        user_id: new_id(),
        name: req.name.trim().to_string(),
        email: req.email,
        password_hash: hash_password(&req.password)?,
        role: "admin".to_string(),
        created_at: now_millis(),
    };

    let user = UserRepository::new(state.get_db()).create(user).await?;

    security_log!("INFO", "user_registered", user_id = user.user_id.clone());
    tracing::info!(user_id = %user.user_id, email = %user.email, "User registered");

    Ok(Json(issue(&state, &user)?))
}

/// POST /api/auth/login - 登录
///
/// Unknown email and wrong password share one error.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepository::new(state.get_db())
        .find_by_email(&req.email)
        .await?;

    let user = match user {
        Some(u) if verify_password(&req.password, &u.password_hash) => u,
        found => {
            tokio::time::sleep(Duration::from_millis(AUTH_FAILURE_DELAY_MS)).await;
            security_log!(
                "WARN",
                "login_failed",
                email = req.email.clone(),
                reason = if found.is_some() { "invalid_password" } else { "user_not_found" }
            );
            return Err(AppError::invalid_credentials());
        }
    };

    tracing::info!(user_id = %user.user_id, "User logged in successfully");

    Ok(Json(issue(&state, &user)?))
}

/// GET /api/auth/me - 当前用户
pub async fn me(State(state): State<ServerState>, current: CurrentUser) -> AppResult<Json<UserInfo>> {
    let user = UserRepository::new(state.get_db())
        .find_by_id(&current.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(UserInfo::from(&user)))
}
