use chrono::{NaiveDate, NaiveTime};
use shared::models::MealPeriod;
use thiserror::Error;

use crate::db::repository::RepoError;
use crate::utils::AppError;

/// Why a reservation request was not admitted
///
/// Every variant except `Storage` is a client-facing rejection with no side
/// effect.
#[derive(Debug, Error)]
pub enum AdmissionError {
    #[error("Settings not configured")]
    ConfigurationMissing,

    #[error("Invalid date or time format: {0}")]
    MalformedInput(String),

    #[error("Restaurant closed on {date}")]
    ClosedDay { date: NaiveDate },

    #[error("Time {} not available for reservations", .time.format("%H:%M"))]
    OutsideServiceHours { time: NaiveTime },

    #[error("No capacity available for this time ({period}: {booked} booked + {requested} requested > {ceiling})")]
    CapacityExceeded {
        period: MealPeriod,
        booked: u32,
        requested: u32,
        ceiling: u32,
    },

    #[error(transparent)]
    Storage(#[from] RepoError),
}

impl AdmissionError {
    /// Stable error code returned to clients
    pub fn code(&self) -> &'static str {
        match self {
            AdmissionError::ConfigurationMissing => "E4001",
            AdmissionError::MalformedInput(_) => "E4002",
            AdmissionError::ClosedDay { .. } => "E4003",
            AdmissionError::OutsideServiceHours { .. } => "E4004",
            AdmissionError::CapacityExceeded { .. } => "E4005",
            AdmissionError::Storage(_) => "E9002",
        }
    }
}

impl From<AdmissionError> for AppError {
    fn from(err: AdmissionError) -> Self {
        match err {
            AdmissionError::Storage(e) => e.into(),
            other => AppError::Rejected {
                code: other.code(),
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_carry_distinct_codes() {
        let err: AppError = AdmissionError::ClosedDay {
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        }
        .into();
        assert!(matches!(err, AppError::Rejected { code: "E4003", .. }));

        let err: AppError = AdmissionError::CapacityExceeded {
            period: MealPeriod::Lunch,
            booked: 48,
            requested: 3,
            ceiling: 50,
        }
        .into();
        match err {
            AppError::Rejected { code, message } => {
                assert_eq!(code, "E4005");
                assert!(message.starts_with("No capacity available"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn storage_failures_are_not_rejections() {
        let err: AppError = AdmissionError::Storage(RepoError::Database("io".into())).into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn outside_hours_message_uses_hh_mm() {
        let err = AdmissionError::OutsideServiceHours {
            time: NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
        };
        assert_eq!(err.to_string(), "Time 16:30 not available for reservations");
    }
}
