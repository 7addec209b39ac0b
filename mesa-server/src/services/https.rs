use std::time::Duration;

use axum::{Router, middleware};
use http::HeaderValue;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::{Config, ServerState};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();

    tracing::info!(target: "http_access", "{} {} {} {}ms", method, uri, status, elapsed_ms);

    response
}

/// CORS: `*` 允许任意来源，否则只允许列出的来源
fn cors_layer(config: &Config) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the Axum router (without state)
pub fn routes() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        // Floor plan
        .merge(crate::api::rooms::router())
        .merge(crate::api::tables::router())
        // Reservations
        .merge(crate::api::settings::router())
        .merge(crate::api::reservations::router())
        // HACCP
        .merge(crate::api::equipment::router())
        .merge(crate::api::spaces::router())
        .merge(crate::api::haccp::router())
        .merge(crate::api::dashboard::router())
}

/// Build the complete application with state and middleware stack
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    let cors = cors_layer(&state.config);

    routes()
        // JWT 认证中间件 - require_auth 内部会跳过公共路由
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        // Tower HTTP 中间件
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
