//! 邮件通知
//!
//! 通过 Resend 兼容的 HTTP API 发送邮件。发送是尽力而为的：
//! 未配置 API key 时跳过，失败只记录日志，从不向调用方传播。

pub mod templates;

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;

/// 邮件配置
///
/// | 环境变量 | 默认值 |
/// |----------|--------|
/// | RESEND_API_KEY | (未设置 = 禁用邮件) |
/// | SENDER_EMAIL | onboarding@resend.dev |
/// | MAIL_API_URL | https://api.resend.com/emails |
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: Option<String>,
    pub sender: String,
    pub api_url: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("RESEND_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            sender: std::env::var("SENDER_EMAIL")
                .unwrap_or_else(|_| "onboarding@resend.dev".into()),
            api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com/emails".into()),
        }
    }

    /// Mail disabled (tests)
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            sender: "onboarding@resend.dev".into(),
            api_url: "https://api.resend.com/emails".into(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Mail API key not configured")]
    Disabled,

    #[error("Mail API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Mail API rejected message: {status} - {body}")]
    Rejected { status: u16, body: String },
}

/// Outbound mail client
#[derive(Debug, Clone)]
pub struct Mailer {
    config: Arc<MailConfig>,
    client: reqwest::Client,
}

impl Mailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: reqwest::Client::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send one HTML message and wait for the API answer
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let api_key = self.config.api_key.as_deref().ok_or(MailError::Disabled)?;

        let resp = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&json!({
                "from": self.config.sender,
                "to": [to],
                "subject": subject,
                "html": html,
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(MailError::Rejected { status, body });
        }

        tracing::info!(target: "mail", to = %to, subject = %subject, "Email sent");
        Ok(())
    }

    /// Fire-and-forget send on a detached task
    ///
    /// Must be called from within a tokio runtime.
    pub fn send_detached(&self, to: String, subject: String, html: String) {
        if !self.is_enabled() {
            tracing::warn!(target: "mail", to = %to, "Mail API key not configured, skipping email");
            return;
        }

        let mailer = self.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&to, &subject, &html).await {
                tracing::error!(target: "mail", to = %to, error = %e, "Failed to send email");
            }
        });
    }
}
