use crate::model::scheduler::SchedulerError;
use odaccess_core::model::{
    aggregation::AggregationError,
    engine::{EngineError, FeatureSourceError},
    time_window::TimeWindowError,
};

#[derive(thiserror::Error, Debug)]
pub enum OdcmAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("error parsing input time window: {0}")]
    TimeWindow(#[from] TimeWindowError),
    #[error(transparent)]
    FeatureSource(#[from] FeatureSourceError),
    #[error("failed loading network: {0}")]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
    #[error("failed writing output: {0}")]
    Output(#[from] AggregationError),
}
