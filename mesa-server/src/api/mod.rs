//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 注册、登录、当前用户
//! - [`rooms`] - 餐厅区域管理
//! - [`tables`] - 桌台管理
//! - [`settings`] - 营业设置
//! - [`reservations`] - 预订 (公开准入 + 管理)
//! - [`equipment`] - HACCP 设备
//! - [`spaces`] - HACCP 空间
//! - [`haccp`] - HACCP 记录与每日提醒
//! - [`dashboard`] - 仪表盘统计

pub mod auth;
pub mod health;

// Floor plan
pub mod rooms;
pub mod tables;

// Reservations
pub mod reservations;
pub mod settings;

// HACCP
pub mod equipment;
pub mod haccp;
pub mod spaces;

pub mod dashboard;

use serde::Serialize;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Plain acknowledgement body for deletions and cancellations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
