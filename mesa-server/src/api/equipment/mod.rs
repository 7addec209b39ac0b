//! Equipment API 模块

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/equipment",
        Router::new()
            .route("/", get(handler::list).post(handler::create))
            .route("/{id}", put(handler::update).delete(handler::delete)),
    )
}
