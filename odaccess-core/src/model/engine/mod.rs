mod engine_error;
mod feature_filter;
mod feature_source;
mod feature_source_error;
mod od_line;
mod routing_engine;
mod solve_request;
mod solve_response;
mod time_units;
mod travel_mode;

pub use engine_error::EngineError;
pub use feature_filter::FeatureFilter;
pub use feature_source::FeatureSource;
pub use feature_source_error::FeatureSourceError;
pub use od_line::OdLine;
pub use routing_engine::RoutingEngine;
pub use solve_request::SolveRequest;
pub use solve_response::{SolveResponse, NO_DESTINATIONS_FOUND_PREFIX};
pub use time_units::TimeUnits;
pub use travel_mode::TravelMode;
