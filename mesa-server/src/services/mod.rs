//! 服务层
//!
//! - [`https`] - 路由装配与 HTTP 中间件栈

pub mod https;

pub use https::build_app;
