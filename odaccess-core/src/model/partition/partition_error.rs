use crate::model::ObjectId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PartitionError {
    #[error("chunk size must be greater than 0")]
    InvalidChunkSize,
    #[error("identifiers must be strictly ascending, found {current} after {previous}")]
    UnorderedIds {
        previous: ObjectId,
        current: ObjectId,
    },
}
