use serde::{Deserialize, Serialize};

/// a named network travel mode. the mode is usable for time-of-day analysis
/// only when its impedance is a time attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelMode {
    pub name: String,
    pub impedance: String,
    pub time_attribute: String,
}

impl TravelMode {
    pub fn is_time_based(&self) -> bool {
        self.impedance == self.time_attribute
    }
}
