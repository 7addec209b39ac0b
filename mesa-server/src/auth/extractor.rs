//! JWT Extractor
//!
//! Handlers behind [`require_auth`](super::require_auth) take `CurrentUser`
//! directly as an argument.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Inserted by the auth middleware
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(AppError::unauthorized)
    }
}
