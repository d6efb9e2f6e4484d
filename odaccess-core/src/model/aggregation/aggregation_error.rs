use crate::model::{chunk::ChunkFileError, engine::FeatureSourceError};

#[derive(thiserror::Error, Debug)]
pub enum AggregationError {
    #[error(transparent)]
    ChunkFile(#[from] ChunkFileError),
    #[error(transparent)]
    FeatureSource(#[from] FeatureSourceError),
    #[error("failed reading result file '{filepath}': {msg}")]
    ReadError { filepath: String, msg: String },
    #[error("failed writing aggregated output: {0}")]
    WriteError(String),
    #[error("result file '{filepath}' has a row without a travel time")]
    MissingTravelTime { filepath: String },
}
