//! Room Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Room entity (餐厅区域：大厅、露台、包厢等)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub created_at: i64,
}

/// Create / replace room payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub capacity: u32,
}
