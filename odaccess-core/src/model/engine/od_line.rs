use crate::model::ObjectId;
use serde::{Deserialize, Serialize};

/// one reached origin-destination pair. `total_time` is present when the solve
/// was asked to report travel times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OdLine {
    #[serde(rename = "OriginOID")]
    pub origin_id: ObjectId,
    #[serde(rename = "DestinationOID")]
    pub destination_id: ObjectId,
    #[serde(
        rename = "Total_Time",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_time: Option<f64>,
}

impl OdLine {
    pub fn new(origin_id: ObjectId, destination_id: ObjectId, total_time: Option<f64>) -> OdLine {
        OdLine {
            origin_id,
            destination_id,
            total_time,
        }
    }
}
