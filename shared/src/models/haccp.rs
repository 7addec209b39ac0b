//! HACCP Record Model (食品安全记录)

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaccpType {
    Temperature,
    Cleaning,
    GoodsReception,
    Expiry,
}

impl HaccpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HaccpType::Temperature => "temperature",
            HaccpType::Cleaning => "cleaning",
            HaccpType::GoodsReception => "goods_reception",
            HaccpType::Expiry => "expiry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaccpRecord {
    pub record_id: String,
    pub record_type: HaccpType,
    /// Equipment or product the reading refers to
    pub equipment_product: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub user_name: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HaccpRecordCreate {
    pub record_type: HaccpType,
    #[validate(length(min = 1, max = 200))]
    pub equipment_product: String,
    #[validate(length(max = 100))]
    pub value: Option<String>,
    #[validate(length(max = 2048))]
    pub photo_url: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub user_name: String,
    pub signature: Option<String>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// `GET /api/haccp` filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HaccpQuery {
    pub record_type: Option<HaccpType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaccpAlert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub priority: AlertPriority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HaccpAlerts {
    pub alerts: Vec<HaccpAlert>,
}
