use crate::model::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// inclusive bounds `[low, high]` on a contiguous block of an ordered identifier
/// space. the block may contain gaps, so `high - low + 1` is only an upper bound
/// on the number of identifiers inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdRange {
    pub low: ObjectId,
    pub high: ObjectId,
}

impl IdRange {
    pub fn new(low: ObjectId, high: ObjectId) -> IdRange {
        IdRange { low, high }
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.low <= id && id <= self.high
    }
}

impl Display for IdRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
