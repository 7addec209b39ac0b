//! Dining Table Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub table_id: String,
    /// Display label shown to staff ("12", "T3", ...)
    pub number: String,
    /// Owning room (weak reference)
    pub room_id: String,
    pub capacity: u32,
    /// Reserved for multi-table combinations; admission never reads it
    #[serde(default)]
    pub can_join: bool,
    #[serde(default)]
    pub created_at: i64,
}

/// Create / replace dining table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableCreate {
    #[validate(length(min = 1, max = 50))]
    pub number: String,
    #[validate(length(min = 1))]
    pub room_id: String,
    #[validate(range(min = 1))]
    pub capacity: u32,
    #[serde(default)]
    pub can_join: bool,
}
