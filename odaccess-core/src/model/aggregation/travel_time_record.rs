use crate::model::ObjectId;
use serde::{Deserialize, Serialize};

/// travel time statistics of one origin-destination pair over the samples in
/// which the destination was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeRecord {
    #[serde(rename = "OriginOID")]
    pub origin_id: ObjectId,
    #[serde(rename = "DestinationOID")]
    pub destination_id: ObjectId,
    pub count: u32,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl TravelTimeRecord {
    /// column names in serialization order.
    pub const HEADER: [&'static str; 6] =
        ["OriginOID", "DestinationOID", "count", "min", "max", "mean"];
}

/// running accumulator for a [`TravelTimeRecord`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct TravelTimeAccumulator {
    count: u32,
    min: f64,
    max: f64,
    sum: f64,
}

impl TravelTimeAccumulator {
    pub fn new(time: f64) -> TravelTimeAccumulator {
        TravelTimeAccumulator {
            count: 1,
            min: time,
            max: time,
            sum: time,
        }
    }

    pub fn add(&mut self, time: f64) {
        self.count += 1;
        self.min = self.min.min(time);
        self.max = self.max.max(time);
        self.sum += time;
    }

    pub fn finish(&self, origin_id: ObjectId, destination_id: ObjectId) -> TravelTimeRecord {
        TravelTimeRecord {
            origin_id,
            destination_id,
            count: self.count,
            min: self.min,
            max: self.max,
            mean: self.sum / self.count as f64,
        }
    }
}
