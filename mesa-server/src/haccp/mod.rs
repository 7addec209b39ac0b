//! HACCP 每日提醒
//!
//! 当天 (UTC) 温度记录少于 3 条 → 高优先级提醒；
//! 清洁记录少于 2 条 → 中优先级提醒。

use chrono::NaiveDate;
use shared::models::{AlertKind, AlertPriority, HaccpAlert, HaccpAlerts, HaccpType};

use crate::db::repository::{HaccpRepository, RepoResult};
use crate::utils::time::{day_end_millis, day_start_millis};

pub const MIN_DAILY_TEMPERATURE_RECORDS: u32 = 3;
pub const MIN_DAILY_CLEANING_RECORDS: u32 = 2;

/// Alerts for one day's record counts
pub fn compute_alerts(temperature_count: u32, cleaning_count: u32) -> HaccpAlerts {
    let mut alerts = Vec::new();

    if temperature_count < MIN_DAILY_TEMPERATURE_RECORDS {
        alerts.push(HaccpAlert {
            kind: AlertKind::Warning,
            message: "Faltam registos de temperatura hoje".to_string(),
            priority: AlertPriority::High,
        });
    }

    if cleaning_count < MIN_DAILY_CLEANING_RECORDS {
        alerts.push(HaccpAlert {
            kind: AlertKind::Warning,
            message: "Faltam registos de limpeza hoje".to_string(),
            priority: AlertPriority::Medium,
        });
    }

    HaccpAlerts { alerts }
}

pub fn has_high_priority(alerts: &HaccpAlerts) -> bool {
    alerts
        .alerts
        .iter()
        .any(|a| a.priority == AlertPriority::High)
}

/// Count the day's records and compute its alerts
pub async fn alerts_for_day(repo: &HaccpRepository, date: NaiveDate) -> RepoResult<HaccpAlerts> {
    let (start, end) = (day_start_millis(date), day_end_millis(date));
    let temperature = repo
        .count_between(Some(HaccpType::Temperature), start, end)
        .await?;
    let cleaning = repo
        .count_between(Some(HaccpType::Cleaning), start, end)
        .await?;
    Ok(compute_alerts(temperature, cleaning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::models::HaccpRecordCreate;

    #[test]
    fn empty_day_raises_both_alerts() {
        let result = compute_alerts(0, 0);
        assert_eq!(result.alerts.len(), 2);
        assert_eq!(result.alerts[0].priority, AlertPriority::High);
        assert_eq!(result.alerts[1].priority, AlertPriority::Medium);
        assert!(has_high_priority(&result));
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert!(compute_alerts(3, 2).alerts.is_empty());

        let only_cleaning = compute_alerts(3, 1);
        assert_eq!(only_cleaning.alerts.len(), 1);
        assert!(!has_high_priority(&only_cleaning));

        let only_temperature = compute_alerts(2, 5);
        assert_eq!(only_temperature.alerts.len(), 1);
        assert!(has_high_priority(&only_temperature));
    }

    #[test]
    fn alert_serializes_type_field() {
        let json = serde_json::to_value(compute_alerts(0, 2)).unwrap();
        assert_eq!(json["alerts"][0]["type"], "warning");
        assert_eq!(json["alerts"][0]["priority"], "high");
    }

    fn record(kind: HaccpType) -> HaccpRecordCreate {
        HaccpRecordCreate {
            record_type: kind,
            equipment_product: "Fridge 1".into(),
            value: Some("3.5".into()),
            photo_url: None,
            user_name: "Chef".into(),
            signature: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn only_records_from_the_day_count() {
        let repo = HaccpRepository::new(DbService::memory().await.unwrap().db);
        let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let start = day_start_millis(day);

        for offset in [0, 1_000, 86_399_999] {
            repo.create_at(record(HaccpType::Temperature), start + offset)
                .await
                .unwrap();
        }
        // Previous and next day
        repo.create_at(record(HaccpType::Cleaning), start - 1).await.unwrap();
        repo.create_at(record(HaccpType::Cleaning), start + 86_400_000)
            .await
            .unwrap();
        repo.create_at(record(HaccpType::Cleaning), start + 5).await.unwrap();

        let alerts = alerts_for_day(&repo, day).await.unwrap();
        assert_eq!(alerts.alerts.len(), 1);
        assert_eq!(alerts.alerts[0].priority, AlertPriority::Medium);
    }
}
