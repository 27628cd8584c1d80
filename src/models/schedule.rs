use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_DURATION: &str = "1-2 days";
pub const DEFAULT_DETAILS: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleActivity {
    pub activity: String,
    #[serde(deserialize_with = "deserialize_activity_date")]
    pub recommended_date: NaiveDate,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ScheduleActivity {
    pub fn new(
        activity: impl Into<String>,
        recommended_date: NaiveDate,
        duration: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            activity: activity.into(),
            recommended_date,
            duration: Some(duration.into()),
            details: Some(details.into()),
        }
    }

    pub fn duration(&self) -> &str {
        self.duration.as_deref().unwrap_or(DEFAULT_DURATION)
    }

    pub fn details(&self) -> &str {
        self.details.as_deref().unwrap_or(DEFAULT_DETAILS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub activities: Vec<ScheduleActivity>,
}

impl Schedule {
    pub fn next_activity(&self) -> Option<&ScheduleActivity> {
        self.activities.first()
    }
}

/// Accepts either a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
fn deserialize_activity_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = String::deserialize(deserializer)?;
    parse_activity_date(&value)
        .ok_or_else(|| D::Error::custom(format!("invalid activity date '{}'", value)))
}

fn parse_activity_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

/// en-IN short date, e.g. `Mon, 19 Oct, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %-d %b, %Y").to_string()
}
