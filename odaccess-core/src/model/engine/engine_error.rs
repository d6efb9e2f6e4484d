#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("travel mode '{name}' not found, available modes: {available:?}")]
    UnknownTravelMode { name: String, available: Vec<String> },
    #[error("invalid value for property '{name}': {reason}")]
    InvalidProperty { name: String, reason: String },
    #[error("failed reading network '{filepath}': {msg}")]
    NetworkReadError { filepath: String, msg: String },
    #[error("failed reading barriers '{filepath}': {msg}")]
    BarrierReadError { filepath: String, msg: String },
    #[error("{0}")]
    InternalError(String),
}
