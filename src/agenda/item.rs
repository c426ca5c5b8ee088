//! Agenda item structure and time-of-day arithmetic

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Category tag for an agenda item, used only for presentation styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Activity,
}

/// A single entry of the daily agenda.
///
/// Times are wall-clock times of day within a single day; agendas never
/// cross midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: u32,
    pub label: String,
    #[serde(rename = "start", with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(rename = "end", with = "clock_time")]
    pub end_time: NaiveTime,
    pub category: Category,
}

impl AgendaItem {
    /// Item length in whole minutes (`end_time - start_time`).
    pub fn duration_minutes(&self) -> u64 {
        // Agenda validation guarantees end > start
        let span = self.end_time.signed_duration_since(self.start_time);
        span.num_minutes().max(0) as u64
    }

    /// Item length in seconds, the unit the countdown runs in.
    pub fn duration_seconds(&self) -> u64 {
        self.duration_minutes() * 60
    }

    /// The `"09:00 - 09:30"` span shown next to the label.
    pub fn time_span(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

/// Serde codec for `"HH:MM"` 24h time-of-day strings.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
