//! Pure admission rules
//!
//! No I/O here: the engine feeds these functions with what it loaded from
//! the store.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveTime};
use shared::models::{DiningTable, MealPeriod, Reservation, ReservationCreate, Settings};

use super::AdmissionError;

/// A request resolved to a concrete service slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub period: MealPeriod,
    /// Guest ceiling of `period`
    pub ceiling: u32,
}

/// Weekday with Monday = 0 ... Sunday = 6
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Meal period containing `time` and its ceiling
///
/// Bounds are inclusive. Lunch is tried first, so a time inside both windows
/// is lunch.
pub fn classify(settings: &Settings, time: NaiveTime) -> Option<(MealPeriod, u32)> {
    if settings.lunch_start <= time && time <= settings.lunch_end {
        Some((MealPeriod::Lunch, settings.max_capacity_lunch))
    } else if settings.dinner_start <= time && time <= settings.dinner_end {
        Some((MealPeriod::Dinner, settings.max_capacity_dinner))
    } else {
        None
    }
}

/// Steps 1-3: settings present, date open, time inside a service window
pub fn resolve_slot(
    settings: Option<&Settings>,
    request: &ReservationCreate,
) -> Result<Slot, AdmissionError> {
    let settings = settings.ok_or(AdmissionError::ConfigurationMissing)?;

    let date = NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d")
        .map_err(|e| AdmissionError::MalformedInput(format!("date '{}': {e}", request.date)))?;
    if !settings.is_open_on(weekday_index(date)) {
        return Err(AdmissionError::ClosedDay { date });
    }

    let time = NaiveTime::parse_from_str(request.time.trim(), "%H:%M")
        .map_err(|e| AdmissionError::MalformedInput(format!("time '{}': {e}", request.time)))?;
    let (period, ceiling) =
        classify(settings, time).ok_or(AdmissionError::OutsideServiceHours { time })?;

    Ok(Slot {
        date,
        time,
        period,
        ceiling,
    })
}

/// Guests already holding capacity in the slot
///
/// Saturates at `u32::MAX`; administrative edits can store any party size.
pub fn booked_guests(existing: &[Reservation]) -> u32 {
    existing
        .iter()
        .filter(|r| r.status.is_active())
        .fold(0u32, |total, r| total.saturating_add(r.guests))
}

/// Step 4: `booked + requested` must not exceed the ceiling
pub fn check_capacity(slot: &Slot, booked: u32, requested: u32) -> Result<(), AdmissionError> {
    if booked.saturating_add(requested) > slot.ceiling {
        return Err(AdmissionError::CapacityExceeded {
            period: slot.period,
            booked,
            requested,
            ceiling: slot.ceiling,
        });
    }
    Ok(())
}

/// Step 5: first table, in the given order, that is free and seats `guests`
///
/// Tables referenced by any active reservation in `existing` count as used.
pub fn select_table<'a>(
    tables: &'a [DiningTable],
    existing: &[Reservation],
    guests: u32,
) -> Option<&'a DiningTable> {
    let used: HashSet<&str> = existing
        .iter()
        .filter(|r| r.status.is_active())
        .filter_map(|r| r.table_id.as_deref())
        .collect();

    tables
        .iter()
        .find(|t| !used.contains(t.table_id.as_str()) && t.capacity >= guests)
}
