//! 认证授权模块
//!
//! 提供 JWT 认证、密码哈希和中间件：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 认证中间件
//! - [`hash_password`] / [`verify_password`] - Argon2 密码工具

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
pub use password::{hash_password, verify_password};
