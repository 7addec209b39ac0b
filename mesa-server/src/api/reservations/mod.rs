//! Reservation API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/reservations | POST | 预订准入 | 无 |
//! | /api/reservations | GET | 按日期/状态查询 | 需要 |
//! | /api/reservations/{id} | PUT | 管理修改 | 需要 |
//! | /api/reservations/{id} | DELETE | 取消 (状态改为 cancelled) | 需要 |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/reservations",
        Router::new()
            .route("/", get(handler::list).post(handler::create))
            .route("/{id}", put(handler::update).delete(handler::cancel)),
    )
}
