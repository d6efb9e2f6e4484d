mod id_range;
mod partition_error;
pub mod partition_ops;

pub use id_range::IdRange;
pub use partition_error::PartitionError;
