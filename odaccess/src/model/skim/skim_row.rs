use odaccess_core::model::ObjectId;
use serde::{Deserialize, Serialize};

/// one row of a skim table: the travel time in minutes from an origin to a
/// destination when leaving at a time of day (`HH:MM`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkimRow {
    pub origin_id: ObjectId,
    pub destination_id: ObjectId,
    pub departure_time: String,
    pub travel_time: f64,
}
