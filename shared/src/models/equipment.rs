//! Equipment Model
//!
//! Fridges, freezers and other devices referenced by HACCP records.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub equipment_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: i64,
}

/// Create / replace equipment payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EquipmentCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub kind: String,
    #[validate(length(max = 200))]
    pub location: Option<String>,
}
