use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d %B %Y %H:%M",
    "%B %d, %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %B %Y", "%B %d, %Y"];

#[derive(Debug, thiserror::Error)]
#[error("{0:?} is not a recognisable delivery time")]
pub struct ScheduleTimeError(String);

/// Absolute delivery time for a scheduled newsletter.
///
/// Accepts the handful of human formats people actually type into a
/// scheduling form. Times without an offset are taken as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryTime(DateTime<Utc>);

impl DeliveryTime {
    pub fn parse(s: &str) -> Result<Self, ScheduleTimeError> {
        let input = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(input)
            .or_else(|_| DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%z"))
        {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| ScheduleTimeError(s.to_owned()))
    }

    /// `2024-01-01T10:00:00+0000`, the ISO-8601 flavour the schedule
    /// endpoint understands.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%z").to_string()
    }
}

impl From<DateTime<Utc>> for DeliveryTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}
