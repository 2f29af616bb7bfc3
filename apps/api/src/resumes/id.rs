use std::str::FromStr;

use anyhow::bail;
use chrono::NaiveDateTime;
use uuid::Uuid;

/// How `ResumeStore::save` names new records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// `resume_<YYYYMMDD_HHMMSS>` from the save instant. Two saves in the same
    /// second share an id and the later one overwrites the earlier.
    Timestamp,
    /// `resume_<uuid v4, simple form>`. Never collides.
    Uuid,
}

impl IdStrategy {
    pub fn generate(&self, now: NaiveDateTime) -> String {
        match self {
            IdStrategy::Timestamp => format!("resume_{}", now.format("%Y%m%d_%H%M%S")),
            IdStrategy::Uuid => format!("resume_{}", Uuid::new_v4().simple()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "timestamp" => Ok(IdStrategy::Timestamp),
            "uuid" => Ok(IdStrategy::Uuid),
            other => bail!("RESUME_ID_STRATEGY must be 'timestamp' or 'uuid', got '{other}'"),
        }
    }
}

/// ISO-8601 local timestamp with microseconds, e.g. `2024-03-05T09:07:02.123456`.
pub fn format_timestamp(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micro)
            .unwrap()
    }

    #[test]
    fn test_timestamp_id_has_second_resolution() {
        let a = IdStrategy::Timestamp.generate(at(9, 7, 2, 10));
        let b = IdStrategy::Timestamp.generate(at(9, 7, 2, 999_000));
        assert_eq!(a, "resume_20240305_090702");
        assert_eq!(a, b);
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let now = at(9, 7, 2, 0);
        let a = IdStrategy::Uuid.generate(now);
        let b = IdStrategy::Uuid.generate(now);
        assert!(a.starts_with("resume_"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("timestamp".parse::<IdStrategy>().unwrap(), IdStrategy::Timestamp);
        assert_eq!(" UUID ".parse::<IdStrategy>().unwrap(), IdStrategy::Uuid);
        assert!("random".parse::<IdStrategy>().is_err());
    }

    #[test]
    fn test_format_timestamp_includes_microseconds() {
        assert_eq!(format_timestamp(at(9, 7, 2, 123_456)), "2024-03-05T09:07:02.123456");
    }
}
