pub mod aggregation;
pub mod chunk;
pub mod engine;
pub mod partition;
pub mod time_window;
pub mod tool;

/// identifier of a row in an origin or destination dataset. identifiers are
/// ordered but not necessarily contiguous.
pub type ObjectId = u64;
