//! Per-slot admission locks
//!
//! One async mutex per (date, meal period). Admission holds it across the
//! read of existing reservations, the capacity sum and the insert, so two
//! requests for the same slot inside this process never interleave. Slots
//! on other dates or periods proceed in parallel.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use shared::models::MealPeriod;
use tokio::sync::{Mutex, OwnedMutexGuard};

type SlotKey = (NaiveDate, MealPeriod);

#[derive(Debug, Default)]
pub struct SlotLocks {
    slots: DashMap<SlotKey, Arc<Mutex<()>>>,
}

impl SlotLocks {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// Wait for exclusive access to a slot
    pub async fn acquire(&self, date: NaiveDate, period: MealPeriod) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the DashMap shard guard is released before awaiting
        let mutex = self
            .slots
            .entry((date, period))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        mutex.lock_owned().await
    }

    /// Drop locks for dates before `today` that nobody is holding
    pub fn prune_before(&self, today: NaiveDate) {
        self.slots
            .retain(|(date, _), mutex| *date >= today || Arc::strong_count(mutex) > 1);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[tokio::test]
    async fn same_slot_is_exclusive() {
        let locks = SlotLocks::new();
        let guard = locks.acquire(day(10), MealPeriod::Lunch).await;

        let second = tokio::time::timeout(
            Duration::from_millis(50),
            locks.acquire(day(10), MealPeriod::Lunch),
        )
        .await;
        assert!(second.is_err());

        drop(guard);
        let third = tokio::time::timeout(
            Duration::from_millis(50),
            locks.acquire(day(10), MealPeriod::Lunch),
        )
        .await;
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn different_slots_do_not_block() {
        let locks = SlotLocks::new();
        let _lunch = locks.acquire(day(10), MealPeriod::Lunch).await;
        let dinner = tokio::time::timeout(
            Duration::from_millis(50),
            locks.acquire(day(10), MealPeriod::Dinner),
        )
        .await;
        assert!(dinner.is_ok());
        assert_eq!(locks.len(), 2);
    }

    #[tokio::test]
    async fn prune_keeps_held_and_future_slots() {
        let locks = SlotLocks::new();
        drop(locks.acquire(day(1), MealPeriod::Lunch).await);
        let _held = locks.acquire(day(2), MealPeriod::Lunch).await;
        drop(locks.acquire(day(20), MealPeriod::Dinner).await);

        locks.prune_before(day(10));
        assert_eq!(locks.len(), 2);
    }
}
