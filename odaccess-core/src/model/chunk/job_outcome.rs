use std::path::PathBuf;

/// result of running a single chunk. a failed solve is a routine outcome, not
/// an error: `succeeded` is false, `messages` explains why and no result file
/// is referenced.
#[derive(Debug, Clone, PartialEq)]
pub struct JobOutcome {
    pub job_id: String,
    pub succeeded: bool,
    pub messages: Vec<String>,
    pub result_file: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl JobOutcome {
    pub fn messages_text(&self) -> String {
        self.messages.join("\n")
    }
}
