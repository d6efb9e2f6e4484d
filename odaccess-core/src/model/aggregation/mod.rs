mod accessibility_aggregator;
mod accessibility_record;
mod accessibility_table;
mod aggregation_error;
mod destination_weights;
pub mod result_file_ops;
mod travel_time_aggregator;
mod travel_time_record;

pub use accessibility_aggregator::AccessibilityAggregator;
pub use accessibility_record::{AccessibilityRecord, DECILES};
pub use accessibility_table::AccessibilityTable;
pub use aggregation_error::AggregationError;
pub use destination_weights::DestinationWeights;
pub use travel_time_aggregator::TravelTimeAggregator;
pub use travel_time_record::TravelTimeRecord;
