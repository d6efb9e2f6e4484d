#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChunkFileError {
    #[error("'{filename}' is not a chunk result filename: {reason}")]
    UnrecognizedFilename { filename: String, reason: String },
}
