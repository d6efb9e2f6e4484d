use serde::{Deserialize, Serialize};

pub const ORIGIN_ID_COLUMN: &str = "OriginOID";
pub const DESTINATION_ID_COLUMN: &str = "DestinationOID";
pub const TOTAL_TIME_COLUMN: &str = "Total_Time";

/// column layout of a chunk result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultSchema {
    /// `OriginOID,DestinationOID`
    OdPairs,
    /// `OriginOID,DestinationOID,Total_Time`
    OdPairsWithTime,
}

impl ResultSchema {
    pub fn columns(&self) -> Vec<&'static str> {
        match self {
            ResultSchema::OdPairs => vec![ORIGIN_ID_COLUMN, DESTINATION_ID_COLUMN],
            ResultSchema::OdPairsWithTime => {
                vec![ORIGIN_ID_COLUMN, DESTINATION_ID_COLUMN, TOTAL_TIME_COLUMN]
            }
        }
    }

    pub fn includes_travel_time(&self) -> bool {
        matches!(self, ResultSchema::OdPairsWithTime)
    }
}
