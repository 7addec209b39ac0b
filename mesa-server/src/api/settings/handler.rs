//! Settings API Handlers

use axum::{Json, extract::State};
use shared::models::{Settings, SettingsUpdate};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::SettingsRepository;
use crate::utils::AppResult;

/// GET /api/settings - 获取营业设置 (不存在则创建默认值)
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Settings>> {
    let settings = SettingsRepository::new(state.get_db()).get_or_create().await?;
    Ok(Json(settings))
}

/// PUT /api/settings - 整体替换营业设置
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentUser,
    Json(payload): Json<SettingsUpdate>,
) -> AppResult<Json<Settings>> {
    payload.validate()?;

    let settings = SettingsRepository::new(state.get_db())
        .save(Settings::from(payload))
        .await?;

    tracing::info!(
        user_id = %current.id,
        open_days = ?settings.open_days,
        lunch_capacity = settings.max_capacity_lunch,
        dinner_capacity = settings.max_capacity_dinner,
        "Settings updated"
    );
    Ok(Json(settings))
}
