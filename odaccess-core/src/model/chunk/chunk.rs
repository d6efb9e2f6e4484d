use crate::model::partition::IdRange;
use chrono::NaiveDateTime;
use std::fmt::Display;

/// one unit of work: a block of origins, a block of destinations and a single
/// departure instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chunk {
    pub origin_range: IdRange,
    pub destination_range: IdRange,
    pub departure: NaiveDateTime,
}

impl Chunk {
    pub fn new(origin_range: IdRange, destination_range: IdRange, departure: NaiveDateTime) -> Chunk {
        Chunk {
            origin_range,
            destination_range,
            departure,
        }
    }
}

impl Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "origins OID {} to {} and destinations OID {} to {} for start time {}",
            self.origin_range.low,
            self.origin_range.high,
            self.destination_range.low,
            self.destination_range.high,
            self.departure
        )
    }
}
