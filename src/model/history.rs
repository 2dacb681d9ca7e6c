use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Deserializer, Serialize};

/// One recorded point change. Never edited once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    #[serde(deserialize_with = "clamped_points")]
    pub old_points: u32,
    #[serde(deserialize_with = "clamped_points")]
    pub new_points: u32,
    pub change: i64,
    #[serde(default)]
    pub reason: String,
}

impl HistoryEntry {
    pub fn create(old_points: u32, new_points: u32, reason: String, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            old_points,
            new_points,
            change: i64::from(new_points) - i64::from(old_points),
            reason,
        }
    }

    /// Local wall-clock time truncated to whole seconds.
    pub fn now() -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }

    /// `+5`, `-3` or `0`.
    pub fn signed_change(&self) -> String {
        if self.change > 0 {
            format!("+{}", self.change)
        } else {
            self.change.to_string()
        }
    }
}

/// Reads any integer into the `u32` range. Older files may hold negative
/// values that were stored before clamping.
pub(crate) fn clamped_points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(u32::try_from(raw.max(0)).unwrap_or(u32::MAX))
}

/// `YYYY-MM-DD HH:MM:SS`, the format existing data files use.
mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
