use chrono::NaiveDateTime;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TimeWindowError {
    #[error("the time increment must be greater than 0, found {0}")]
    InvalidIncrement(i64),
    #[error("end time {end} is earlier than start time {start}")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("'{0}' is neither an English weekday name nor a YYYYMMDD date")]
    InvalidDay(String),
    #[error("'{0}' is not a valid HH:MM time of day")]
    InvalidTimeOfDay(String),
    #[error("start day is {start} but end day is {end}, use either a specific date or a generic weekday for both")]
    MixedDayTokens { start: String, end: String },
    #[error("when using a generic weekday, start day ({start}) and end day ({end}) must be the same")]
    DifferentWeekdays { start: String, end: String },
}
