//! Serde helpers for time-of-day values
//!
//! 营业时间统一使用 "HH:MM" 字符串 (前端和数据库一致)。

/// `NaiveTime` <-> `"HH:MM"`
///
/// Deserialization also accepts `"HH:MM:SS"` so documents written by other
/// tools still load.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    /// Parse `"HH:MM"` (or `"HH:MM:SS"`)
    pub fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::hhmm;
    use chrono::NaiveTime;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Slot {
        #[serde(with = "hhmm")]
        at: NaiveTime,
    }

    #[test]
    fn writes_hours_and_minutes_only() {
        let slot = Slot {
            at: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        };
        assert_eq!(serde_json::to_string(&slot).unwrap(), r#"{"at":"19:30"}"#);
    }

    #[test]
    fn accepts_seconds_on_read() {
        let slot: Slot = serde_json::from_str(r#"{"at":"12:00:00"}"#).unwrap();
        assert_eq!(slot.at, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Slot>(r#"{"at":"noon"}"#).is_err());
        assert!(hhmm::parse("25:00").is_err());
    }
}
