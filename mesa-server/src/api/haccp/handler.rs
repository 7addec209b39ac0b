//! HACCP API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use shared::models::{HaccpAlerts, HaccpQuery, HaccpRecord, HaccpRecordCreate};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::HaccpRepository;
use crate::haccp;
use crate::notify::templates;
use crate::utils::AppResult;
use crate::utils::time::today;
use crate::utils::validation::validate_not_blank;

/// GET /api/haccp?record_type= - 记录列表 (新的在前)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<HaccpQuery>,
) -> AppResult<Json<Vec<HaccpRecord>>> {
    let records = HaccpRepository::new(state.get_db())
        .find(query.record_type)
        .await?;
    Ok(Json(records))
}

/// POST /api/haccp - 新增记录
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<HaccpRecordCreate>,
) -> AppResult<Json<HaccpRecord>> {
    payload.validate()?;
    validate_not_blank(&payload.equipment_product, "equipment_product")?;
    validate_not_blank(&payload.user_name, "user_name")?;

    let record = HaccpRepository::new(state.get_db()).create(payload).await?;
    tracing::info!(
        record_id = %record.record_id,
        record_type = record.record_type.as_str(),
        "HACCP record created"
    );
    Ok(Json(record))
}

/// GET /api/haccp/alerts - 当天提醒
///
/// A high-priority alert also mails the requesting user.
pub async fn alerts(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<HaccpAlerts>> {
    let repo = HaccpRepository::new(state.get_db());
    let alerts = haccp::alerts_for_day(&repo, today()).await?;

    if haccp::has_high_priority(&alerts) && !current.email.is_empty() {
        state.mailer().send_detached(
            current.email.clone(),
            templates::HACCP_ALERT_SUBJECT.to_string(),
            templates::haccp_alert(&alerts.alerts),
        );
    }

    Ok(Json(alerts))
}
