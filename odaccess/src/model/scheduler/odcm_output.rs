use super::BatchResult;
use odaccess_core::model::aggregation::AccessibilityTable;
use std::{path::PathBuf, time::Duration};

/// aggregated result of a run.
#[derive(Debug, Clone)]
pub enum OdcmOutput {
    /// per-origin statistics, to be written onto the origins table
    Accessibility(AccessibilityTable),
    /// statistics were written to `output_csv`
    TravelTime { output_csv: PathBuf, rows: usize },
    /// no chunk succeeded, so nothing was aggregated
    NoResults,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub batch: BatchResult,
    pub output: OdcmOutput,
    pub scratch_folder: PathBuf,
    pub elapsed: Duration,
}
