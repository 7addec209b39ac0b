use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::admission::{AdmissionEngine, SlotLocks};
use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::notify::Mailer;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 句柄实现浅拷贝，每个请求 clone 一份成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | mailer | Mailer | 邮件通知 |
/// | slot_locks | Arc<SlotLocks> | 预订餐段锁 (日期 + 餐段) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 邮件通知
    pub mailer: Mailer,
    /// 准入引擎共享的餐段锁
    pub slot_locks: Arc<SlotLocks>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 或 [`in_memory()`](Self::in_memory)
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let mailer = Mailer::new(config.mail.clone());

        Self {
            config,
            db,
            jwt_service,
            mailer,
            slot_locks: Arc::new(SlotLocks::new()),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database)
    /// 3. 各服务 (JWT, Mailer, SlotLocks)
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_service = DbService::new(&config.database_dir()).await?;

        if config.mail.api_key.is_none() {
            tracing::warn!("RESEND_API_KEY not set, outgoing email disabled");
        }

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 基于内存数据库的状态 (测试)
    pub async fn in_memory(config: Config) -> Result<Self> {
        let db_service = DbService::memory().await?;
        Ok(Self::new(config, db_service.db))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取邮件服务
    pub fn mailer(&self) -> &Mailer {
        &self.mailer
    }

    /// 构造准入引擎 (共享本状态的餐段锁)
    pub fn admission(&self) -> AdmissionEngine {
        AdmissionEngine::new(self.get_db(), self.slot_locks.clone(), self.mailer.clone())
    }
}
