//! Space API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Space, SpaceCreate};
use validator::Validate;

use crate::api::MessageResponse;
use crate::core::ServerState;
use crate::db::repository::SpaceRepository;
use crate::utils::AppResult;
use crate::utils::validation::validate_not_blank;

fn check(payload: &SpaceCreate) -> AppResult<()> {
    payload.validate()?;
    validate_not_blank(&payload.name, "name")?;
    validate_not_blank(&payload.kind, "type")
}

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Space>>> {
    Ok(Json(SpaceRepository::new(state.get_db()).find_all().await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SpaceCreate>,
) -> AppResult<Json<Space>> {
    check(&payload)?;
    Ok(Json(SpaceRepository::new(state.get_db()).create(payload).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SpaceCreate>,
) -> AppResult<Json<Space>> {
    check(&payload)?;
    Ok(Json(
        SpaceRepository::new(state.get_db())
            .update(&id, payload)
            .await?,
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    SpaceRepository::new(state.get_db()).delete(&id).await?;
    Ok(Json(MessageResponse::new("Space deleted successfully")))
}
