use super::{EngineError, SolveRequest, SolveResponse, TravelMode};

/// a network routing engine capable of origin-destination reachability solves
/// at a departure instant. implementations must be safe to share between the
/// worker threads of a run.
pub trait RoutingEngine: Send + Sync {
    fn name(&self) -> String;

    /// finds a travel mode by name.
    fn resolve_travel_mode(&self, name: &str) -> Result<TravelMode, EngineError>;

    /// names of the optional solve properties this engine understands.
    fn recognized_properties(&self) -> Vec<String>;

    /// runs one solve. `Ok` with `succeeded == false` is a routine failure;
    /// `Err` means the engine itself could not operate.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, EngineError>;
}
