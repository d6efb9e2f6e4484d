use crate::model::solver::SolverError;
use odaccess_core::model::{
    aggregation::AggregationError, engine::FeatureSourceError, partition::PartitionError,
};

#[derive(thiserror::Error, Debug)]
pub enum SchedulerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Partition(#[from] PartitionError),
    #[error(transparent)]
    FeatureSource(#[from] FeatureSourceError),
    #[error("solver validation failed: {0}")]
    Validation(#[from] SolverError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error("failed building worker pool: {0}")]
    PoolBuildError(String),
    #[error("progress bar error: {0}")]
    ProgressBarError(String),
    #[error("worker failed on {chunk}: {msg}")]
    WorkerFailure { chunk: String, msg: String },
    #[error("expected {expected} chunk results but only {received} were retrieved")]
    ResultsNotRetrieved { expected: usize, received: usize },
    #[error("failure with scratch or output folder '{path}': {source}")]
    FolderError {
        path: String,
        source: std::io::Error,
    },
}
