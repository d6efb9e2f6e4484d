use odaccess_core::model::{
    engine::{FeatureSource, RoutingEngine, TimeUnits},
    time_window::TimeWindow,
    tool::OdTool,
};
use std::{path::PathBuf, sync::Arc};

/// analysis inputs of a parallel OD cost matrix run.
pub struct OdcmInputs {
    pub tool: OdTool,
    pub origins: Arc<dyn FeatureSource>,
    pub destinations: Arc<dyn FeatureSource>,
    pub engine: Arc<dyn RoutingEngine>,
    pub travel_mode: String,
    pub time_window: TimeWindow,
    /// maximum origins per chunk
    pub max_origins: usize,
    /// maximum destinations per chunk
    pub max_destinations: usize,
    pub max_processes: usize,
    pub time_units: TimeUnits,
    pub cutoff: Option<f64>,
    pub barriers: Vec<PathBuf>,
    /// keep chunk result files here instead of in the scratch folder
    pub output_folder: Option<PathBuf>,
}
