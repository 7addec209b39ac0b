//! Administrative reservation amendments
//!
//! Staff may move or resize a reservation without the capacity and open-day
//! checks. A new date or time must still parse, and a new time must fall in
//! a service window so `meal_type` stays meaningful.

use chrono::{NaiveDate, NaiveTime};
use shared::models::{Reservation, ReservationUpdate, Settings};

use super::{AdmissionError, rules};

/// Merge every supplied field of `update` into `reservation`
pub fn amend(
    reservation: &mut Reservation,
    update: ReservationUpdate,
    settings: Option<&Settings>,
) -> Result<(), AdmissionError> {
    if let Some(date) = update.date {
        reservation.date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| AdmissionError::MalformedInput(format!("date '{date}': {e}")))?;
    }

    if let Some(time) = update.time {
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|e| AdmissionError::MalformedInput(format!("time '{time}': {e}")))?;
        let settings = settings.ok_or(AdmissionError::ConfigurationMissing)?;
        let (period, _) =
            rules::classify(settings, time).ok_or(AdmissionError::OutsideServiceHours { time })?;
        reservation.time = time;
        reservation.meal_type = period;
    }

    if let Some(name) = update.name {
        reservation.name = name.trim().to_string();
    }
    if let Some(phone) = update.phone {
        reservation.phone = phone.trim().to_string();
    }
    if let Some(email) = update.email {
        reservation.email = Some(email);
    }
    if let Some(guests) = update.guests {
        reservation.guests = guests;
    }
    if let Some(table_id) = update.table_id {
        reservation.table_id = Some(table_id);
    }
    if let Some(status) = update.status {
        reservation.status = status;
    }
    if let Some(notes) = update.notes {
        reservation.notes = Some(notes);
    }

    Ok(())
}
