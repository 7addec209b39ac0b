use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::notify::MailConfig;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 8001 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | CORS_ORIGINS | * | 允许的来源，逗号分隔 |
///
/// JWT 与邮件配置见 [`JwtConfig`] 和 [`MailConfig`]。
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/var/lib/mesa HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// CORS 允许来源; 包含 `*` 时允许任意来源
    pub cors_origins: Vec<String>,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 邮件配置
    pub mail: MailConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8001),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            ),
            jwt: JwtConfig::default(),
            mail: MailConfig::from_env(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录: {work_dir}/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())
    }

    /// 是否允许任意来源
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test ,,"),
            vec!["http://a.test", "http://b.test"]
        );
        assert_eq!(parse_origins("*"), vec!["*"]);
    }

    #[test]
    fn database_lives_under_work_dir() {
        let config = Config::with_overrides("/tmp/mesa", 9000);
        assert_eq!(config.database_dir(), PathBuf::from("/tmp/mesa/database"));
        assert_eq!(config.http_port, 9000);
    }
}
