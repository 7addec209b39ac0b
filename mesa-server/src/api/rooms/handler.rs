//! Room API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Room, RoomCreate};
use validator::Validate;

use crate::api::MessageResponse;
use crate::core::ServerState;
use crate::db::repository::RoomRepository;
use crate::utils::validation::validate_not_blank;
use crate::utils::{AppError, AppResult};

/// GET /api/rooms - 获取所有区域
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Room>>> {
    let repo = RoomRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/rooms/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.get_db());
    let room = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Room {} not found", id)))?;
    Ok(Json(room))
}

/// POST /api/rooms - 创建区域
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    payload.validate()?;
    validate_not_blank(&payload.name, "name")?;

    let room = RoomRepository::new(state.get_db()).create(payload).await?;
    tracing::info!(room_id = %room.room_id, name = %room.name, "Room created");
    Ok(Json(room))
}

/// PUT /api/rooms/{id} - 更新区域
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    payload.validate()?;
    validate_not_blank(&payload.name, "name")?;

    let room = RoomRepository::new(state.get_db()).update(&id, payload).await?;
    Ok(Json(room))
}

/// DELETE /api/rooms/{id} - 删除区域 (桌台保留其 room_id)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    RoomRepository::new(state.get_db()).delete(&id).await?;
    tracing::info!(room_id = %id, "Room deleted");
    Ok(Json(MessageResponse::new("Room deleted successfully")))
}
