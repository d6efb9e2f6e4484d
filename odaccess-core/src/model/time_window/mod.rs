mod day_token;
mod departure_iterator;
mod time_window;
mod time_window_error;

pub use day_token::DayToken;
pub use departure_iterator::DepartureIterator;
pub use time_window::{TimeWindow, TIME_OF_DAY_FORMAT};
pub use time_window_error::TimeWindowError;
