use super::{DayToken, DepartureIterator, TimeWindowError};
use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

pub const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// an analysis time window. departures are sampled from `start`, advancing by
/// `increment`, for as long as the sample does not pass `end`. the end instant
/// is itself a sample only when it lands on the increment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
    increment: TimeDelta,
}

impl TimeWindow {
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        increment_minutes: i64,
    ) -> Result<TimeWindow, TimeWindowError> {
        if increment_minutes <= 0 {
            return Err(TimeWindowError::InvalidIncrement(increment_minutes));
        }
        let increment = TimeDelta::try_minutes(increment_minutes)
            .ok_or(TimeWindowError::InvalidIncrement(increment_minutes))?;
        if end < start {
            return Err(TimeWindowError::EndBeforeStart { start, end });
        }
        Ok(TimeWindow {
            start,
            end,
            increment,
        })
    }

    /// builds a time window from user-facing day and time-of-day tokens.
    ///
    /// # Arguments
    ///
    /// * `start_day` - English weekday name or YYYYMMDD date
    /// * `start_time` - HH:MM time of day, 24 hour clock
    /// * `end_day` - English weekday name or YYYYMMDD date, same kind as `start_day`
    /// * `end_time` - HH:MM time of day, 24 hour clock
    /// * `increment_minutes` - minutes between departure samples
    pub fn from_tokens(
        start_day: &str,
        start_time: &str,
        end_day: &str,
        end_time: &str,
        increment_minutes: i64,
    ) -> Result<TimeWindow, TimeWindowError> {
        let start_token: DayToken = start_day.parse()?;
        let end_token: DayToken = end_day.parse()?;
        match (start_token, end_token) {
            (DayToken::Weekday(s), DayToken::Weekday(e)) if s != e => {
                return Err(TimeWindowError::DifferentWeekdays {
                    start: start_day.to_string(),
                    end: end_day.to_string(),
                })
            }
            (s, e) if s.is_generic_weekday() != e.is_generic_weekday() => {
                return Err(TimeWindowError::MixedDayTokens {
                    start: start_day.to_string(),
                    end: end_day.to_string(),
                })
            }
            _ => {}
        }
        let start = resolve_instant(&start_token, start_day, start_time)?;
        let end = resolve_instant(&end_token, end_day, end_time)?;
        TimeWindow::new(start, end, increment_minutes)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn increment_minutes(&self) -> i64 {
        self.increment.num_minutes()
    }

    /// iterates the departure instants of this window in ascending order.
    pub fn departures(&self) -> DepartureIterator {
        DepartureIterator::new(self.start, self.end, self.increment)
    }

    /// number of departure samples, `floor((end - start) / increment) + 1`.
    pub fn sample_count(&self) -> usize {
        let span = (self.end - self.start).num_seconds();
        let step = self.increment.num_seconds();
        (span / step) as usize + 1
    }
}

fn resolve_instant(
    token: &DayToken,
    day: &str,
    time_of_day: &str,
) -> Result<NaiveDateTime, TimeWindowError> {
    let date = token
        .reference_date()
        .ok_or_else(|| TimeWindowError::InvalidDay(day.to_string()))?;
    let time = NaiveTime::parse_from_str(time_of_day.trim(), TIME_OF_DAY_FORMAT)
        .map_err(|_| TimeWindowError::InvalidTimeOfDay(time_of_day.to_string()))?;
    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::TimeWindow;
    use crate::model::time_window::TimeWindowError;
    use chrono::{NaiveDate, NaiveDateTime};
    use itertools::Itertools;

    fn instant(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    #[test]
    fn test_aligned_window_includes_end() {
        let window = TimeWindow::from_tokens("Wednesday", "08:00", "Wednesday", "09:00", 30)
            .expect("valid window");
        let departures = window.departures().collect_vec();
        assert_eq!(
            departures,
            vec![
                instant(1900, 1, 3, 8, 0),
                instant(1900, 1, 3, 8, 30),
                instant(1900, 1, 3, 9, 0),
            ]
        );
        assert_eq!(window.sample_count(), 3);
    }

    #[test]
    fn test_unaligned_window_stops_before_end() {
        let window =
            TimeWindow::from_tokens("20220428", "08:00", "20220428", "08:50", 20).unwrap();
        let departures = window.departures().collect_vec();
        assert_eq!(
            departures,
            vec![
                instant(2022, 4, 28, 8, 0),
                instant(2022, 4, 28, 8, 20),
                instant(2022, 4, 28, 8, 40),
            ]
        );
        assert_eq!(window.sample_count(), departures.len());
    }

    #[test]
    fn test_departures_strictly_increasing_and_counted() {
        for increment in [1, 7, 15, 45, 60, 90] {
            let window =
                TimeWindow::from_tokens("20220101", "06:00", "20220102", "10:13", increment)
                    .unwrap();
            let departures = window.departures().collect_vec();
            assert!(departures.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(departures.len(), window.sample_count(), "{increment}");
            assert_eq!(departures.first(), Some(&window.start()));
            assert!(departures.iter().all(|d| *d <= window.end()));
        }
    }

    #[test]
    fn test_multi_day_window() {
        let window =
            TimeWindow::from_tokens("20220428", "23:00", "20220429", "01:00", 60).unwrap();
        assert_eq!(window.sample_count(), 3);
        assert_eq!(
            window.departures().last(),
            Some(instant(2022, 4, 29, 1, 0))
        );
    }

    #[test]
    fn test_single_instant_window() {
        let window = TimeWindow::from_tokens("Friday", "12:00", "Friday", "12:00", 10).unwrap();
        assert_eq!(window.departures().collect_vec().len(), 1);
    }

    #[test]
    fn test_invalid_windows() {
        assert!(matches!(
            TimeWindow::from_tokens("Monday", "08:00", "Monday", "09:00", 0),
            Err(TimeWindowError::InvalidIncrement(0))
        ));
        assert!(matches!(
            TimeWindow::from_tokens("Monday", "08:00", "Monday", "09:00", -5),
            Err(TimeWindowError::InvalidIncrement(-5))
        ));
        assert!(matches!(
            TimeWindow::from_tokens("Monday", "09:00", "Monday", "08:00", 5),
            Err(TimeWindowError::EndBeforeStart { .. })
        ));
        assert!(matches!(
            TimeWindow::from_tokens("Monday", "08:00", "Tuesday", "09:00", 5),
            Err(TimeWindowError::DifferentWeekdays { .. })
        ));
        assert!(matches!(
            TimeWindow::from_tokens("Monday", "08:00", "20220428", "09:00", 5),
            Err(TimeWindowError::MixedDayTokens { .. })
        ));
        assert!(matches!(
            TimeWindow::from_tokens("Monday", "8 o'clock", "Monday", "09:00", 5),
            Err(TimeWindowError::InvalidTimeOfDay(_))
        ));
        assert!(matches!(
            TimeWindow::from_tokens("Someday", "08:00", "Someday", "09:00", 5),
            Err(TimeWindowError::InvalidDay(_))
        ));
    }
}
