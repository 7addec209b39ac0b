//! Equipment API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Equipment, EquipmentCreate};
use validator::Validate;

use crate::api::MessageResponse;
use crate::core::ServerState;
use crate::db::repository::EquipmentRepository;
use crate::utils::AppResult;
use crate::utils::validation::validate_not_blank;

fn check(payload: &EquipmentCreate) -> AppResult<()> {
    payload.validate()?;
    validate_not_blank(&payload.name, "name")?;
    validate_not_blank(&payload.kind, "type")
}

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Equipment>>> {
    Ok(Json(EquipmentRepository::new(state.get_db()).find_all().await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EquipmentCreate>,
) -> AppResult<Json<Equipment>> {
    check(&payload)?;
    let equipment = EquipmentRepository::new(state.get_db()).create(payload).await?;
    Ok(Json(equipment))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EquipmentCreate>,
) -> AppResult<Json<Equipment>> {
    check(&payload)?;
    let equipment = EquipmentRepository::new(state.get_db())
        .update(&id, payload)
        .await?;
    Ok(Json(equipment))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    EquipmentRepository::new(state.get_db()).delete(&id).await?;
    Ok(Json(MessageResponse::new("Equipment deleted successfully")))
}
