//! Reservation Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers::hhmm;

/// Meal period a reservation falls into (餐段)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    Lunch,
    Dinner,
}

impl MealPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealPeriod::Lunch => "lunch",
            MealPeriod::Dinner => "dinner",
        }
    }
}

impl std::fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }

    /// Cancelled reservations hold neither capacity nor a table
    pub fn is_active(&self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "completed" => Ok(ReservationStatus::Completed),
            other => Err(format!("Unknown reservation status: {}", other)),
        }
    }
}

/// Reservation entity (预订)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub guests: u32,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub meal_type: MealPeriod,
    /// Assigned table (weak reference); `None` when no table fitted
    #[serde(default)]
    pub table_id: Option<String>,
    pub status: ReservationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: i64,
}

/// Public reservation request
///
/// `date` and `time` stay raw strings; parsing them is part of admission so
/// malformed values are reported as admission rejections.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub phone: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(range(min = 1, max = 500))]
    pub guests: u32,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Administrative partial update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReservationUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(range(min = 1, max = 500))]
    pub guests: Option<u32>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub table_id: Option<String>,
    pub status: Option<ReservationStatus>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// `GET /api/reservations` filters
///
/// Raw strings; the handler parses them so bad values get the usual error body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationQuery {
    pub date: Option<String>,
    pub status: Option<String>,
}
