//! Dashboard API 模块

use axum::{Json, Router, extract::State, routing::get};
use shared::models::DashboardStats;

use crate::core::ServerState;
use crate::dashboard;
use crate::utils::AppResult;
use crate::utils::time::today;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/dashboard/stats", get(stats))
}

/// GET /api/dashboard/stats
async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let stats = dashboard::stats_for(&state.get_db(), today()).await?;
    Ok(Json(stats))
}
