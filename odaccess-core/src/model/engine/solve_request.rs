use super::{TimeUnits, TravelMode};
use crate::model::{tool::ResultSchema, ObjectId};
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// inputs to a single routing solve: the origin and destination ids of one
/// chunk at one departure instant.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub origins: Vec<ObjectId>,
    pub destinations: Vec<ObjectId>,
    pub travel_mode: TravelMode,
    pub departure: NaiveDateTime,
    /// impedance cutoff in `time_units`
    pub cutoff: Option<f64>,
    pub time_units: TimeUnits,
    pub barriers: Vec<PathBuf>,
    /// additional engine properties, already filtered to those the engine
    /// recognizes
    pub properties: serde_json::Map<String, serde_json::Value>,
    pub schema: ResultSchema,
}
