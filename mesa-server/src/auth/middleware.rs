//! 认证中间件
//!
//! 为 JWT 认证提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::security_log;

/// 无需登录即可访问的 API (方法 + 路径)
const PUBLIC_API_ROUTES: &[(&str, &str)] = &[
    ("POST", "/api/auth/register"),
    ("POST", "/api/auth/login"),
    ("GET", "/api/settings"),
    ("POST", "/api/reservations"),
];

fn is_public_api_route(method: &Method, path: &str) -> bool {
    let path = path.trim_end_matches('/');
    PUBLIC_API_ROUTES
        .iter()
        .any(|(m, p)| *m == method.as_str() && *p == path)
}

/// 认证中间件 - 要求用户登录
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT，
/// 再确认令牌主体仍然存在。验证成功后将 [`CurrentUser`] 注入请求扩展。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径 (`/health` 等)
/// - [`PUBLIC_API_ROUTES`] 中列出的公开接口
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 Unauthorized |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 / 用户已不存在 | 401 InvalidToken |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path();
    if !path.starts_with("/api/") || is_public_api_route(req.method(), path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    let claims = match state.get_jwt_service().validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            return match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            };
        }
    };

    let user = UserRepository::new(state.get_db())
        .find_by_id(&claims.sub)
        .await?;
    let Some(user) = user else {
        security_log!("WARN", "auth_unknown_subject", user_id = claims.sub.clone());
        return Err(AppError::invalid_token("User not found"));
    };

    req.extensions_mut().insert(CurrentUser::from(&user));
    Ok(next.run(req).await)
}
