use super::OdLine;

/// engine diagnostic emitted once per origin that reaches nothing. solvers
/// collapse these into a single count.
pub const NO_DESTINATIONS_FOUND_PREFIX: &str = "No \"Destinations\" found for ";

/// outcome of a single routing solve. an unsuccessful solve is a routine
/// result and carries its reason in `messages`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveResponse {
    pub succeeded: bool,
    pub messages: Vec<String>,
    pub rows: Vec<OdLine>,
}

impl SolveResponse {
    pub fn success(rows: Vec<OdLine>, messages: Vec<String>) -> SolveResponse {
        SolveResponse {
            succeeded: true,
            messages,
            rows,
        }
    }

    pub fn failure(messages: Vec<String>) -> SolveResponse {
        SolveResponse {
            succeeded: false,
            messages,
            rows: vec![],
        }
    }
}
