use odaccess_core::model::{
    chunk::ChunkFileCodec,
    engine::{FeatureSource, RoutingEngine, TimeUnits},
    tool::ResultSchema,
};
use std::{path::PathBuf, sync::Arc};

/// engine properties the tool always sets from its own inputs. values for
/// these in the solver settings are ignored.
pub const PROPERTIES_SET_BY_TOOL: [&str; 4] = [
    "travel_mode",
    "time_units",
    "default_impedance_cutoff",
    "time_of_day",
];

/// read-only inputs shared by every chunk solver of a run.
pub struct ChunkSolverConfig {
    pub engine: Arc<dyn RoutingEngine>,
    pub origins: Arc<dyn FeatureSource>,
    pub destinations: Arc<dyn FeatureSource>,
    pub schema: ResultSchema,
    /// destinations must have a non-zero value in this field to be solved
    pub destination_filter_field: Option<String>,
    pub travel_mode: String,
    pub time_units: TimeUnits,
    pub cutoff: Option<f64>,
    pub barriers: Vec<PathBuf>,
    /// additional engine properties from the run settings
    pub properties: serde_json::Map<String, serde_json::Value>,
    /// job log files are written here
    pub scratch_folder: PathBuf,
    /// chunk result files are written here
    pub output_folder: PathBuf,
    pub codec: ChunkFileCodec,
}
