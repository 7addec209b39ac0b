//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{DiningTable, DiningTableCreate};
use validator::Validate;

use crate::api::MessageResponse;
use crate::core::ServerState;
use crate::db::repository::DiningTableRepository;
use crate::utils::validation::validate_not_blank;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct TableQuery {
    pub room_id: Option<String>,
}

/// GET /api/tables - 获取桌台 (可按区域过滤)
///
/// Same order admission scans tables in.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TableQuery>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.get_db());
    let tables = match query.room_id.as_deref() {
        Some(room_id) => repo.find_by_room(room_id).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(tables))
}

/// GET /api/tables/{id} - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    Ok(Json(table))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    payload.validate()?;
    validate_not_blank(&payload.number, "number")?;

    let table = DiningTableRepository::new(state.get_db())
        .create(payload)
        .await?;
    tracing::info!(table_id = %table.table_id, number = %table.number, "Table created");
    Ok(Json(table))
}

/// PUT /api/tables/{id} - 更新桌台
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    payload.validate()?;
    validate_not_blank(&payload.number, "number")?;

    let table = DiningTableRepository::new(state.get_db())
        .update(&id, payload)
        .await?;
    Ok(Json(table))
}

/// DELETE /api/tables/{id} - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    DiningTableRepository::new(state.get_db()).delete(&id).await?;
    tracing::info!(table_id = %id, "Table deleted");
    Ok(Json(MessageResponse::new("Table deleted successfully")))
}
