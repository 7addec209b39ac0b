//! Settings API 模块
//!
//! | 路径 | 方法 | 认证 |
//! |------|------|------|
//! | /api/settings | GET | 无 (首次读取时写入默认值) |
//! | /api/settings | PUT | 需要 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/settings", get(handler::get).put(handler::update))
}
