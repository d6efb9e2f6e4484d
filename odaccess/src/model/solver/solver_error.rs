use odaccess_core::model::engine::{EngineError, FeatureSourceError};

#[derive(thiserror::Error, Debug)]
pub enum SolverError {
    #[error("travel mode '{name}' cannot be used: {reason}")]
    InvalidTravelMode { name: String, reason: String },
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    FeatureSource(#[from] FeatureSourceError),
    #[error("failed creating job log '{filepath}': {source}")]
    LogFileError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed writing result file '{filepath}': {msg}")]
    ResultWriteError { filepath: String, msg: String },
}
