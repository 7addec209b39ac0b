//! 预订准入引擎
//!
//! 把一个预订请求变成已确认的预订，或给出拒绝原因：
//!
//! 1. 无设置 → `ConfigurationMissing`
//! 2. 日期解析，星期不营业 → `ClosedDay`
//! 3. 时间解析并归入午餐/晚餐 (闭区间，午餐优先) → 否则 `OutsideServiceHours`
//! 4. 同日同餐段未取消预订的人数 + 本次人数 > 上限 → `CapacityExceeded`
//! 5. 按 (number, table_id) 顺序找第一张空闲且够坐的桌台 (找不到不算错误)
//! 6. 以 `confirmed` 状态写入
//! 7. 有邮箱则后台发送确认邮件
//!
//! 第 4-6 步在 (日期, 餐段) 锁内执行。

mod amend;
mod error;
mod locks;
pub mod rules;


pub use amend::amend;
pub use error::AdmissionError;
pub use locks::SlotLocks;
pub use rules::Slot;

use std::sync::Arc;

use shared::models::{Reservation, ReservationCreate, ReservationStatus, Settings};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{DiningTableRepository, ReservationRepository};
use crate::notify::{Mailer, templates};
use crate::utils::time::today;

/// Stale slot locks are pruned once the map grows past this many entries
const LOCK_PRUNE_THRESHOLD: usize = 512;

#[derive(Clone)]
pub struct AdmissionEngine {
    reservations: ReservationRepository,
    tables: DiningTableRepository,
    locks: Arc<SlotLocks>,
    mailer: Mailer,
}

impl AdmissionEngine {
    pub fn new(db: Surreal<Db>, locks: Arc<SlotLocks>, mailer: Mailer) -> Self {
        Self {
            reservations: ReservationRepository::new(db.clone()),
            tables: DiningTableRepository::new(db),
            locks,
            mailer,
        }
    }

    /// Admit a reservation request against the given settings
    ///
    /// Rejections leave the store untouched. The confirmation email, if any,
    /// is sent after the reservation is persisted and never affects the
    /// result.
    pub async fn admit(
        &self,
        settings: Option<&Settings>,
        request: &ReservationCreate,
    ) -> Result<Reservation, AdmissionError> {
        let slot = rules::resolve_slot(settings, request)?;

        let (reservation, table_label) = {
            let _guard = self.locks.acquire(slot.date, slot.period).await;

            let existing = self
                .reservations
                .find_active_in_slot(slot.date, slot.period)
                .await?;
            let booked = rules::booked_guests(&existing);
            rules::check_capacity(&slot, booked, request.guests)?;

            let tables = self.tables.find_all().await?;
            let table = rules::select_table(&tables, &existing, request.guests);
            if table.is_none() {
                tracing::info!(
                    date = %slot.date,
                    period = %slot.period,
                    guests = request.guests,
                    "No free table fits, admitting without assignment"
                );
            }

            let reservation = Reservation {
                reservation_id: new_id(),
                name: request.name.trim().to_string(),
                phone: request.phone.trim().to_string(),
                email: request.email.clone(),
                guests: request.guests,
                date: slot.date,
                time: slot.time,
                meal_type: slot.period,
                table_id: table.map(|t| t.table_id.clone()),
                status: ReservationStatus::Confirmed,
                notes: request.notes.clone(),
                created_at: now_millis(),
            };
            let reservation = self.reservations.insert(reservation).await?;
            (reservation, table.map(|t| t.number.clone()))
        };

        tracing::info!(
            reservation_id = %reservation.reservation_id,
            date = %reservation.date,
            period = %reservation.meal_type,
            guests = reservation.guests,
            table_id = ?reservation.table_id,
            "Reservation admitted"
        );

        if let Some(email) = &reservation.email {
            self.mailer.send_detached(
                email.clone(),
                templates::RESERVATION_SUBJECT.to_string(),
                templates::reservation_confirmation(&reservation, table_label.as_deref()),
            );
        }

        if self.locks.len() > LOCK_PRUNE_THRESHOLD {
            self.locks.prune_before(today());
        }

        Ok(reservation)
    }
}
