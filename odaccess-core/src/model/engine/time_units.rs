use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// units for cutoffs and reported travel times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnits {
    Seconds,
    #[default]
    Minutes,
    Hours,
    Days,
}

impl TimeUnits {
    fn minutes_per_unit(&self) -> f64 {
        match self {
            TimeUnits::Seconds => 1.0 / 60.0,
            TimeUnits::Minutes => 1.0,
            TimeUnits::Hours => 60.0,
            TimeUnits::Days => 1440.0,
        }
    }

    pub fn from_minutes(&self, minutes: f64) -> f64 {
        minutes / self.minutes_per_unit()
    }

    pub fn to_minutes(&self, value: f64) -> f64 {
        value * self.minutes_per_unit()
    }
}

impl Display for TimeUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeUnits::Seconds => "seconds",
            TimeUnits::Minutes => "minutes",
            TimeUnits::Hours => "hours",
            TimeUnits::Days => "days",
        };
        write!(f, "{s}")
    }
}
