use crate::model::ObjectId;

#[derive(thiserror::Error, Debug)]
pub enum FeatureSourceError {
    #[error("failed reading '{filepath}': {msg}")]
    ReadError { filepath: String, msg: String },
    #[error("{source_name} has no field '{field}'")]
    MissingField { source_name: String, field: String },
    #[error("{source_name} row {id} field '{field}' is not numeric: '{value}'")]
    NonNumericValue {
        source_name: String,
        field: String,
        id: ObjectId,
        value: String,
    },
    #[error("{source_name} has duplicate or unordered object id {id}")]
    UnorderedId { source_name: String, id: ObjectId },
}
