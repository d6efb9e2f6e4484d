use super::TimeWindowError;
use chrono::{NaiveDate, Weekday};
use std::{fmt::Display, str::FromStr};

pub const DAY_TOKEN_DATE_FORMAT: &str = "%Y%m%d";

/// the day portion of a time window boundary. either a generic weekday, which
/// resolves to a fixed date in the reference week 1899-12-31..1900-01-06, or
/// a specific calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayToken {
    Weekday(Weekday),
    Date(NaiveDate),
}

impl DayToken {
    /// the calendar date this token resolves to. generic weekdays map into the
    /// reference week that begins with Monday 1900-01-01, except Sunday which
    /// is the day before (1899-12-31).
    pub fn reference_date(&self) -> Option<NaiveDate> {
        match self {
            DayToken::Date(date) => Some(*date),
            DayToken::Weekday(Weekday::Sun) => NaiveDate::from_ymd_opt(1899, 12, 31),
            DayToken::Weekday(weekday) => {
                NaiveDate::from_ymd_opt(1900, 1, 1 + weekday.num_days_from_monday())
            }
        }
    }

    pub fn is_generic_weekday(&self) -> bool {
        matches!(self, DayToken::Weekday(_))
    }
}

impl FromStr for DayToken {
    type Err = TimeWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let weekday = match trimmed.to_ascii_lowercase().as_str() {
            "monday" => Some(Weekday::Mon),
            "tuesday" => Some(Weekday::Tue),
            "wednesday" => Some(Weekday::Wed),
            "thursday" => Some(Weekday::Thu),
            "friday" => Some(Weekday::Fri),
            "saturday" => Some(Weekday::Sat),
            "sunday" => Some(Weekday::Sun),
            _ => None,
        };
        match weekday {
            Some(w) => Ok(DayToken::Weekday(w)),
            None => NaiveDate::parse_from_str(trimmed, DAY_TOKEN_DATE_FORMAT)
                .map(DayToken::Date)
                .map_err(|_| TimeWindowError::InvalidDay(s.to_string())),
        }
    }
}

impl Display for DayToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayToken::Weekday(w) => write!(f, "{w}"),
            DayToken::Date(d) => write!(f, "{}", d.format(DAY_TOKEN_DATE_FORMAT)),
        }
    }
}
