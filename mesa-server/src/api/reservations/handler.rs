//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{
    Reservation, ReservationCreate, ReservationQuery, ReservationStatus, ReservationUpdate,
};
use validator::Validate;

use crate::admission;
use crate::api::MessageResponse;
use crate::core::ServerState;
use crate::db::repository::{ReservationRepository, SettingsRepository};
use crate::utils::time::parse_date;
use crate::utils::validation::{validate_not_blank, validate_optional_not_blank};
use crate::utils::{AppError, AppResult};

/// POST /api/reservations - 公开预订
///
/// Settings are loaded here and handed to the engine; a missing settings
/// document is a rejection, not a default.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    payload.validate()?;
    validate_not_blank(&payload.name, "name")?;
    validate_not_blank(&payload.phone, "phone")?;

    let settings = SettingsRepository::new(state.get_db()).get().await?;
    let reservation = state.admission().admit(settings.as_ref(), &payload).await?;
    Ok(Json(reservation))
}

/// GET /api/reservations?date=&status=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReservationQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let date = query.date.as_deref().map(parse_date).transpose()?;
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ReservationStatus>)
        .transpose()
        .map_err(AppError::validation)?;
    let reservations = ReservationRepository::new(state.get_db())
        .find(date, status)
        .await?;
    Ok(Json(reservations))
}

/// PUT /api/reservations/{id} - 管理修改 (不检查容量)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    payload.validate()?;
    validate_optional_not_blank(&payload.name, "name")?;
    validate_optional_not_blank(&payload.phone, "phone")?;

    let repo = ReservationRepository::new(state.get_db());
    let mut reservation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;

    let settings = if payload.time.is_some() {
        SettingsRepository::new(state.get_db()).get().await?
    } else {
        None
    };
    admission::amend(&mut reservation, payload, settings.as_ref())?;

    let reservation = repo.save(reservation).await?;
    tracing::info!(
        reservation_id = %reservation.reservation_id,
        status = %reservation.status.as_str(),
        "Reservation updated"
    );
    Ok(Json(reservation))
}

/// DELETE /api/reservations/{id} - 取消预订 (保留记录)
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    ReservationRepository::new(state.get_db())
        .set_status(&id, ReservationStatus::Cancelled)
        .await?;
    tracing::info!(reservation_id = %id, "Reservation cancelled");
    Ok(Json(MessageResponse::new("Reservation cancelled successfully")))
}
