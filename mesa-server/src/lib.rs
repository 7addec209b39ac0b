//! Mesa Server - 餐厅预订与 HACCP 管理后端
//!
//! # 架构概述
//!
//! - **预订准入** (`admission`): 餐段划分、容量检查、桌台分配
//! - **数据库** (`db`): 嵌入式 SurrealDB 文档存储
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **HTTP API** (`api`): RESTful API 接口
//! - **通知** (`notify`): 尽力而为的邮件通知
//!
//! # 模块结构
//!
//! ```text
//! mesa-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证
//! ├── admission/     # 预订准入引擎
//! ├── haccp/         # HACCP 每日提醒
//! ├── dashboard/     # 仪表盘统计
//! ├── notify/        # 邮件通知
//! ├── services/      # HTTP 路由装配
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层
//! ```

pub mod admission;
pub mod api;
pub mod auth;
pub mod core;
pub mod dashboard;
pub mod db;
pub mod haccp;
pub mod notify;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use admission::{AdmissionEngine, AdmissionError};
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use notify::Mailer;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: 加载 .env 并初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(Some(&log_level), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___
   /  |/  /__  _________ _
  / /|_/ / _ \/ ___/ __ `/
 / /  / /  __(__  ) /_/ /
/_/  /_/\___/____/\__,_/
    "#
    );
}
