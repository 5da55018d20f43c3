//! Health notification models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// What a notification is about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Medication,
    Checkup,
    Activity,
    Diet,
    Monitoring,
}

/// How often a notification repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Custom,
}

/// Notification priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Error for malformed `"HH:MM"` time strings.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid schedule time {0:?}, expected HH:MM")]
pub struct InvalidScheduleTime(pub String);

/// Wall-clock time of day a notification fires, serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleTime {
    pub hour: u8,
    pub minute: u8,
}

impl ScheduleTime {
    /// Construct from in-range components. Callers building registry tables
    /// pass literals; out-of-range values are a programming error.
    pub fn new(hour: u8, minute: u8) -> Self {
        debug_assert!(hour < 24 && minute < 60);
        Self { hour, minute }
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ScheduleTime {
    type Err = InvalidScheduleTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidScheduleTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(err)?;
        let hour: u8 = hour.parse().map_err(|_| err())?;
        let minute: u8 = minute.parse().map_err(|_| err())?;
        if hour > 23 || minute > 59 {
            return Err(err());
        }
        Ok(Self { hour, minute })
    }
}

impl Serialize for ScheduleTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScheduleTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An authored notification template, before ids and attribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationTemplate {
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    pub frequency: Frequency,
    pub time: ScheduleTime,
    pub priority: Priority,
}

/// A notification synthesized for a concrete profile.
///
/// Identity is the position in the generated sequence and does not persist
/// across regenerations. `enabled` starts true; toggling it is UI state
/// layered on top of the generated output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedNotification {
    pub id: String,
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    pub frequency: Frequency,
    pub time: ScheduleTime,
    pub priority: Priority,
    pub enabled: bool,
    /// Best-effort attribution; `"General Wellness"` when no condition's
    /// name appears in the title or message
    pub condition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_time_parse() {
        let time: ScheduleTime = "09:00".parse().unwrap();
        assert_eq!(time, ScheduleTime::new(9, 0));

        let time: ScheduleTime = "15:30".parse().unwrap();
        assert_eq!(time, ScheduleTime::new(15, 30));
    }

    #[test]
    fn test_schedule_time_rejects_garbage() {
        assert!("".parse::<ScheduleTime>().is_err());
        assert!("9".parse::<ScheduleTime>().is_err());
        assert!("24:00".parse::<ScheduleTime>().is_err());
        assert!("12:60".parse::<ScheduleTime>().is_err());
        assert!("ab:cd".parse::<ScheduleTime>().is_err());
    }

    #[test]
    fn test_schedule_time_display_pads() {
        assert_eq!(ScheduleTime::new(7, 30).to_string(), "07:30");
        assert_eq!(ScheduleTime::new(16, 0).to_string(), "16:00");
    }

    #[test]
    fn test_schedule_time_serde_round_trip() {
        let json = serde_json::to_string(&ScheduleTime::new(8, 0)).unwrap();
        assert_eq!(json, "\"08:00\"");

        let parsed: ScheduleTime = serde_json::from_str("\"13:30\"").unwrap();
        assert_eq!(parsed, ScheduleTime::new(13, 30));
    }

    #[test]
    fn test_template_category_serializes_as_type() {
        let template = NotificationTemplate {
            category: NotificationCategory::Monitoring,
            title: "Blood Sugar Check".into(),
            message: "Time to check your blood glucose levels".into(),
            frequency: Frequency::Daily,
            time: ScheduleTime::new(8, 0),
            priority: Priority::High,
        };
        let json = serde_json::to_string(&template).unwrap();
        assert!(json.contains("\"type\":\"monitoring\""));
        assert!(json.contains("\"time\":\"08:00\""));
    }
}
