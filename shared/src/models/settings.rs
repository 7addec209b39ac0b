//! Restaurant Settings Model (Singleton)

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::serde_helpers::hhmm;

/// Fixed key of the settings singleton
pub const SETTINGS_ID: &str = "global";

/// Upper bound for a meal period's guest ceiling
pub const MAX_PERIOD_CAPACITY: u32 = 10_000;

/// Operating parameters used by reservation admission (营业设置)
///
/// Weekdays use the Monday = 0 convention, Sunday = 6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_settings_id")]
    pub settings_id: String,
    pub open_days: Vec<u8>,
    #[serde(with = "hhmm")]
    pub lunch_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub lunch_end: NaiveTime,
    #[serde(with = "hhmm")]
    pub dinner_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub dinner_end: NaiveTime,
    /// Average seating duration in minutes (informational)
    pub avg_table_time: u32,
    pub max_capacity_lunch: u32,
    pub max_capacity_dinner: u32,
}

fn default_settings_id() -> String {
    SETTINGS_ID.to_string()
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for Settings {
    /// Mon–Sat, lunch 12:00–15:00, dinner 19:00–23:00
    fn default() -> Self {
        Self {
            settings_id: default_settings_id(),
            open_days: vec![0, 1, 2, 3, 4, 5],
            lunch_start: hm(12, 0),
            lunch_end: hm(15, 0),
            dinner_start: hm(19, 0),
            dinner_end: hm(23, 0),
            avg_table_time: 90,
            max_capacity_lunch: 50,
            max_capacity_dinner: 60,
        }
    }
}

impl Settings {
    /// Whether reservations are accepted on the given weekday (0 = Monday)
    pub fn is_open_on(&self, weekday: u8) -> bool {
        self.open_days.contains(&weekday)
    }

    /// Sum of both period ceilings
    pub fn total_capacity(&self) -> u32 {
        self.max_capacity_lunch
            .saturating_add(self.max_capacity_dinner)
    }
}

/// Update settings payload (full replace)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_settings_update"))]
pub struct SettingsUpdate {
    pub open_days: Vec<u8>,
    #[serde(with = "hhmm")]
    pub lunch_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub lunch_end: NaiveTime,
    #[serde(with = "hhmm")]
    pub dinner_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub dinner_end: NaiveTime,
    pub avg_table_time: u32,
    pub max_capacity_lunch: u32,
    pub max_capacity_dinner: u32,
}

fn validate_settings_update(update: &SettingsUpdate) -> Result<(), ValidationError> {
    if update.open_days.iter().any(|d| *d > 6) {
        return Err(ValidationError::new("open_days")
            .with_message("open_days must contain weekday numbers 0-6".into()));
    }
    if update.lunch_start > update.lunch_end {
        return Err(ValidationError::new("lunch_window")
            .with_message("lunch_start must not be after lunch_end".into()));
    }
    if update.dinner_start > update.dinner_end {
        return Err(ValidationError::new("dinner_window")
            .with_message("dinner_start must not be after dinner_end".into()));
    }
    if update.max_capacity_lunch > MAX_PERIOD_CAPACITY
        || update.max_capacity_dinner > MAX_PERIOD_CAPACITY
    {
        return Err(ValidationError::new("max_capacity")
            .with_message(format!("capacity ceilings must not exceed {MAX_PERIOD_CAPACITY}").into()));
    }
    Ok(())
}

impl From<SettingsUpdate> for Settings {
    fn from(update: SettingsUpdate) -> Self {
        let mut open_days = update.open_days;
        open_days.sort_unstable();
        open_days.dedup();

        Self {
            settings_id: default_settings_id(),
            open_days,
            lunch_start: update.lunch_start,
            lunch_end: update.lunch_end,
            dinner_start: update.dinner_start,
            dinner_end: update.dinner_end,
            avg_table_time: update.avg_table_time,
            max_capacity_lunch: update.max_capacity_lunch,
            max_capacity_dinner: update.max_capacity_dinner,
        }
    }
}
