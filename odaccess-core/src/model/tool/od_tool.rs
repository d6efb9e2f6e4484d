use super::ResultSchema;
use std::{fmt::Display, path::PathBuf};

/// the analysis to run over the chunk universe. selected once per run; each
/// variant carries its own settings and determines the chunk result schema
/// and the aggregation that consumes it.
#[derive(Debug, Clone, PartialEq)]
pub enum OdTool {
    /// per-origin reachability statistics written onto the origins table.
    Accessibility {
        /// destination weight field. destinations where it is empty or zero
        /// are left out of every solve.
        weight_field: Option<String>,
    },
    /// per origin-destination travel time statistics written to a CSV.
    TravelTime { output_csv: PathBuf },
}

impl OdTool {
    pub fn schema(&self) -> ResultSchema {
        match self {
            OdTool::Accessibility { .. } => ResultSchema::OdPairs,
            OdTool::TravelTime { .. } => ResultSchema::OdPairsWithTime,
        }
    }

    /// the field destinations must carry a non-zero value in to be solved.
    pub fn destination_filter_field(&self) -> Option<&str> {
        match self {
            OdTool::Accessibility { weight_field, .. } => weight_field.as_deref(),
            OdTool::TravelTime { .. } => None,
        }
    }
}

impl Display for OdTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OdTool::Accessibility { .. } => write!(f, "accessibility"),
            OdTool::TravelTime { .. } => write!(f, "travel time statistics"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OdTool;
    use crate::model::tool::ResultSchema;
    use std::path::PathBuf;

    #[test]
    fn test_schema_follows_tool() {
        let access = OdTool::Accessibility {
            weight_field: Some(String::from("jobs")),
        };
        assert_eq!(access.schema(), ResultSchema::OdPairs);
        assert_eq!(access.destination_filter_field(), Some("jobs"));

        let tt = OdTool::TravelTime {
            output_csv: PathBuf::from("out.csv"),
        };
        assert_eq!(tt.schema(), ResultSchema::OdPairsWithTime);
        assert_eq!(tt.schema().columns().len(), 3);
        assert_eq!(tt.destination_filter_field(), None);
    }
}
