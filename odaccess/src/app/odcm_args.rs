use super::OdcmAppError;
use crate::model::{
    dataset::{CsvFeatureSource, DEFAULT_ID_FIELD},
    scheduler::OdcmInputs,
    skim::SkimEngine,
};
use clap::Args;
use odaccess_core::model::{engine::TimeUnits, time_window::TimeWindow, tool::OdTool};
use std::{path::PathBuf, sync::Arc};

/// analysis inputs shared by every tool
#[derive(Args, Debug, Clone)]
pub struct OdcmArgs {
    /// origins CSV with a header row
    #[arg(long)]
    pub origins: PathBuf,
    /// destinations CSV with a header row
    #[arg(long)]
    pub destinations: PathBuf,
    /// network TOML naming the skim table and its travel modes
    #[arg(long)]
    pub network: PathBuf,
    /// name of a travel mode defined by the network
    #[arg(long)]
    pub travel_mode: String,
    /// maximum number of origins in a chunk
    #[arg(long, default_value_t = 1000)]
    pub max_origins: usize,
    /// maximum number of destinations in a chunk
    #[arg(long, default_value_t = 1000)]
    pub max_destinations: usize,
    /// number of chunks solved in parallel
    #[arg(long, default_value_t = 4)]
    pub max_processes: usize,
    /// English weekday name or YYYYMMDD date
    #[arg(long)]
    pub time_window_start_day: String,
    /// HH:MM, 24 hour clock
    #[arg(long)]
    pub time_window_start_time: String,
    /// English weekday name or YYYYMMDD date, same kind as the start day
    #[arg(long)]
    pub time_window_end_day: String,
    /// HH:MM, 24 hour clock
    #[arg(long)]
    pub time_window_end_time: String,
    /// minutes between departure times in the window
    #[arg(long)]
    pub time_increment: i64,
    /// units of the cutoff and of reported travel times
    #[arg(long, value_enum, default_value_t = TimeUnits::Minutes)]
    pub time_units: TimeUnits,
    /// impedance cutoff in `time_units`
    #[arg(long)]
    pub cutoff: Option<f64>,
    /// CSV files listing closed location ids
    #[arg(long, num_args = 1..)]
    pub barriers: Vec<PathBuf>,
    /// keep the individual chunk results in this folder
    #[arg(long)]
    pub output_folder: Option<PathBuf>,
    #[arg(long, default_value_t = String::from(DEFAULT_ID_FIELD))]
    pub origins_id_field: String,
    #[arg(long, default_value_t = String::from(DEFAULT_ID_FIELD))]
    pub destinations_id_field: String,
}

impl OdcmArgs {
    /// loads datasets and the network and resolves the time window.
    pub fn build_inputs(&self, tool: OdTool) -> Result<OdcmInputs, OdcmAppError> {
        let time_window = TimeWindow::from_tokens(
            &self.time_window_start_day,
            &self.time_window_start_time,
            &self.time_window_end_day,
            &self.time_window_end_time,
            self.time_increment,
        )?;
        log::info!(
            "time window {} to {} every {} minutes ({} start times)",
            time_window.start(),
            time_window.end(),
            time_window.increment_minutes(),
            time_window.sample_count()
        );
        let origins = CsvFeatureSource::from_path(&self.origins, &self.origins_id_field)?;
        let destinations =
            CsvFeatureSource::from_path(&self.destinations, &self.destinations_id_field)?;
        let engine = SkimEngine::from_network_file(&self.network)?;
        Ok(OdcmInputs {
            tool,
            origins: Arc::new(origins),
            destinations: Arc::new(destinations),
            engine: Arc::new(engine),
            travel_mode: self.travel_mode.clone(),
            time_window,
            max_origins: self.max_origins,
            max_destinations: self.max_destinations,
            max_processes: self.max_processes,
            time_units: self.time_units,
            cutoff: self.cutoff,
            barriers: self.barriers.clone(),
            output_folder: self.output_folder.clone(),
        })
    }
}
