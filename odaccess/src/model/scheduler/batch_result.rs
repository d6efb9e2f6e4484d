use odaccess_core::model::chunk::JobOutcome;
use std::path::PathBuf;

/// outcomes of a completed batch of chunks, bucketed by success.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub succeeded: Vec<JobOutcome>,
    pub failed: Vec<JobOutcome>,
}

impl BatchResult {
    pub fn completed(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// result files of the successful chunks, sorted by path.
    pub fn result_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .succeeded
            .iter()
            .filter_map(|o| o.result_file.clone())
            .collect();
        files.sort();
        files
    }
}
