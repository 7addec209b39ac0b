use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动与运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("数据库初始化失败: {0}")]
    Database(String),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AppError> for ServerError {
    fn from(err: AppError) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// 启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
