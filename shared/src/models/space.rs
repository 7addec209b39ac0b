//! Space Model
//!
//! Kitchen / storage areas subject to cleaning records.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub space_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Create / replace space payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SpaceCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub kind: String,
}
