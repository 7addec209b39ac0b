//! 时间工具函数
//!
//! 日期统一按 UTC 计算 ("今天" = UTC 当天)。
//! Repository 层只接收 `i64` Unix millis 或 `NaiveDate`。

use chrono::{NaiveDate, NaiveTime, Utc};

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 当前 UTC 日期
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// 日期开始 (00:00:00 UTC) → Unix millis
pub fn day_start_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// 日期结束 → 次日 00:00:00 UTC 的 Unix millis
///
/// 返回次日零点时间戳，调用方使用 `< end` (不含) 语义。
pub fn day_end_millis(date: NaiveDate) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day)
}
