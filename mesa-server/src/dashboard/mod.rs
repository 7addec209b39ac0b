//! 仪表盘统计
//!
//! 以当天 (UTC) 为基准：
//! - 当天未取消预订数
//! - 入座率 = 当天总人数 / (午餐上限 + 晚餐上限) × 100，保留一位小数
//! - 今天起最近 5 条未取消预订
//! - HACCP 待办 = max(0, 5 - 当天记录数)

use chrono::NaiveDate;
use shared::models::{DashboardStats, Reservation, Settings};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{
    HaccpRepository, RepoResult, ReservationRepository, SettingsRepository,
};
use crate::utils::time::{day_end_millis, day_start_millis};

pub const UPCOMING_LIMIT: usize = 5;
pub const DAILY_HACCP_TARGET: u32 = 5;

/// Occupancy percentage rounded to one decimal; 0 when there is no capacity
pub fn occupancy_rate(total_guests: u32, total_capacity: u32) -> f64 {
    if total_capacity == 0 {
        return 0.0;
    }
    let rate = f64::from(total_guests) / f64::from(total_capacity) * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Records still missing to reach the daily target
pub fn pending_haccp(records_today: u32) -> u32 {
    DAILY_HACCP_TARGET.saturating_sub(records_today)
}

/// Assemble stats from already-loaded data
///
/// `settings` absent falls back to the default ceilings.
pub fn assemble(
    settings: Option<&Settings>,
    today_active: &[Reservation],
    upcoming: Vec<Reservation>,
    haccp_records_today: u32,
) -> DashboardStats {
    let total_capacity = settings
        .map(Settings::total_capacity)
        .unwrap_or_else(|| Settings::default().total_capacity());
    let total_guests = today_active
        .iter()
        .fold(0u32, |total, r| total.saturating_add(r.guests));
    let pending = pending_haccp(haccp_records_today);

    DashboardStats {
        today_reservations: today_active.len() as u64,
        occupancy_rate: occupancy_rate(total_guests, total_capacity),
        upcoming_reservations: upcoming,
        haccp_alerts: pending,
        pending_records: pending,
    }
}

/// Load everything the dashboard needs for `today`
pub async fn stats_for(db: &Surreal<Db>, today: NaiveDate) -> RepoResult<DashboardStats> {
    let reservations = ReservationRepository::new(db.clone());
    let settings = SettingsRepository::new(db.clone()).get().await?;

    let today_active = reservations.find_active_on(today).await?;
    let upcoming = reservations.find_upcoming(today, UPCOMING_LIMIT).await?;
    let haccp_today = HaccpRepository::new(db.clone())
        .count_between(None, day_start_millis(today), day_end_millis(today))
        .await?;

    Ok(assemble(settings.as_ref(), &today_active, upcoming, haccp_today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use shared::models::{MealPeriod, ReservationStatus};

    fn reservation(guests: u32) -> Reservation {
        Reservation {
            reservation_id: shared::util::new_id(),
            name: "x".into(),
            phone: "1".into(),
            email: None,
            guests,
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            meal_type: MealPeriod::Lunch,
            table_id: None,
            status: ReservationStatus::Confirmed,
            notes: None,
            created_at: 0,
        }
    }

    #[test]
    fn occupancy_rounds_to_one_decimal() {
        assert_eq!(occupancy_rate(0, 110), 0.0);
        assert_eq!(occupancy_rate(55, 110), 50.0);
        assert_eq!(occupancy_rate(1, 3), 33.3);
        assert_eq!(occupancy_rate(2, 3), 66.7);
        assert_eq!(occupancy_rate(5, 0), 0.0);
    }

    #[test]
    fn huge_parties_saturate_the_guest_total() {
        let today = vec![reservation(u32::MAX), reservation(4)];
        let stats = assemble(Some(&Settings::default()), &today, Vec::new(), 0);
        assert_eq!(stats.today_reservations, 2);
        assert!(stats.occupancy_rate.is_finite());
        assert!(stats.occupancy_rate > 100.0);
    }

    #[test]
    fn pending_never_goes_negative() {
        assert_eq!(pending_haccp(0), 5);
        assert_eq!(pending_haccp(3), 2);
        assert_eq!(pending_haccp(9), 0);
    }

    #[test]
    fn missing_settings_use_default_ceilings() {
        let today = vec![reservation(11), reservation(11)];
        let stats = assemble(None, &today, Vec::new(), 1);
        assert_eq!(stats.today_reservations, 2);
        assert_eq!(stats.occupancy_rate, 20.0);
        assert_eq!(stats.haccp_alerts, 4);
        assert_eq!(stats.pending_records, 4);
    }

    #[test]
    fn stored_settings_drive_occupancy() {
        let settings = Settings {
            max_capacity_lunch: 10,
            max_capacity_dinner: 10,
            ..Settings::default()
        };
        let stats = assemble(Some(&settings), &[reservation(5)], Vec::new(), 0);
        assert_eq!(stats.occupancy_rate, 25.0);
    }
}
