//! Reservation Repository (Ledger)
//!
//! Reservations are never deleted; cancellation is a status change.

use chrono::NaiveDate;

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{MealPeriod, Reservation, ReservationStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "reservation";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        self.base.get(TABLE, id).await
    }

    /// Non-cancelled reservations holding capacity in one date + meal period
    pub async fn find_active_in_slot(
        &self,
        date: NaiveDate,
        period: MealPeriod,
    ) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation WHERE date = $date AND meal_type = $meal AND status != 'cancelled' ORDER BY created_at",
            )
            .bind(("date", date.to_string()))
            .bind(("meal", period.as_str()))
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Non-cancelled reservations on a date, both periods
    pub async fn find_active_on(&self, date: NaiveDate) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation WHERE date = $date AND status != 'cancelled' ORDER BY time",
            )
            .bind(("date", date.to_string()))
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Next non-cancelled reservations from `from` on, earliest first
    pub async fn find_upcoming(&self, from: NaiveDate, limit: usize) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation WHERE date >= $from AND status != 'cancelled' ORDER BY date, time LIMIT $limit",
            )
            .bind(("from", from.to_string()))
            .bind(("limit", limit as i64))
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// List with optional date / status filters
    pub async fn find(
        &self,
        date: Option<NaiveDate>,
        status: Option<ReservationStatus>,
    ) -> RepoResult<Vec<Reservation>> {
        let mut conditions = Vec::new();
        if date.is_some() {
            conditions.push("date = $date");
        }
        if status.is_some() {
            conditions.push("status = $status");
        }

        let mut sql = String::from("SELECT * FROM reservation");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY date, time");

        let mut query = self.base.db().query(sql);
        if let Some(date) = date {
            query = query.bind(("date", date.to_string()));
        }
        if let Some(status) = status {
            query = query.bind(("status", status.as_str()));
        }

        let reservations: Vec<Reservation> = query.await?.take(0)?;
        Ok(reservations)
    }

    pub async fn insert(&self, reservation: Reservation) -> RepoResult<Reservation> {
        let id = reservation.reservation_id.clone();
        self.base.insert(TABLE, &id, reservation).await
    }

    /// Replace a reservation document
    pub async fn save(&self, reservation: Reservation) -> RepoResult<Reservation> {
        let id = reservation.reservation_id.clone();
        self.base.replace(TABLE, &id, reservation).await
    }

    /// Set the status of a reservation (cancellation is `Cancelled`)
    pub async fn set_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> RepoResult<Reservation> {
        let mut reservation = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;
        reservation.status = status;
        self.save(reservation).await
    }
}
