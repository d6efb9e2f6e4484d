use super::{BatchResult, SchedulerError};
use crate::model::solver::SolverError;
use kdam::{Bar, BarExt};
use odaccess_core::model::chunk::{Chunk, JobOutcome};
use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
    sync::{mpsc, Arc},
};

/// runs chunks on a fixed-size pool of worker threads and collects their
/// outcomes in completion order.
///
/// a chunk whose solve fails routinely is recorded and the batch continues.
/// a worker that returns an error or panics aborts the batch: the failure is
/// logged and returned, and chunks still queued or running are abandoned.
pub struct ParallelScheduler {
    max_workers: usize,
}

impl ParallelScheduler {
    pub fn new(max_workers: usize) -> ParallelScheduler {
        ParallelScheduler { max_workers }
    }

    pub fn run<F>(&self, chunks: Vec<Chunk>, task: F) -> Result<BatchResult, SchedulerError>
    where
        F: Fn(Chunk) -> Result<JobOutcome, SolverError> + Send + Sync + 'static,
    {
        let total = chunks.len();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .thread_name(|i| format!("odcm-worker-{i}"))
            .build()
            .map_err(|e| SchedulerError::PoolBuildError(e.to_string()))?;

        let task = Arc::new(task);
        let (tx, rx) = mpsc::channel();
        for chunk in chunks {
            let tx = tx.clone();
            let task = task.clone();
            pool.spawn(move || {
                let result = catch_unwind(AssertUnwindSafe(|| task(chunk)));
                // the receiver is gone once the batch has been aborted
                let _ = tx.send((chunk, result));
            });
        }
        drop(tx);

        let mut bar = Bar::builder()
            .desc("OD cost matrix chunks")
            .total(total)
            .build()
            .map_err(SchedulerError::ProgressBarError)?;
        let mut batch = BatchResult::default();
        for (completed, (chunk, result)) in rx.iter().enumerate() {
            let _ = bar.update(1);
            log::info!(
                "finished OD cost matrix calculation {} of {}",
                completed + 1,
                total
            );
            match result {
                Ok(Ok(outcome)) if outcome.succeeded => batch.succeeded.push(outcome),
                Ok(Ok(outcome)) => {
                    log::debug!(
                        "solve failed for job id {} ({}): {}",
                        outcome.job_id,
                        chunk,
                        outcome.messages_text()
                    );
                    batch.failed.push(outcome);
                }
                Ok(Err(e)) => {
                    eprintln!();
                    log::error!("error solving OD cost matrix for {chunk}: {e}");
                    return Err(SchedulerError::WorkerFailure {
                        chunk: chunk.to_string(),
                        msg: e.to_string(),
                    });
                }
                Err(payload) => {
                    eprintln!();
                    let msg = panic_message(payload.as_ref());
                    log::error!("worker panicked solving OD cost matrix for {chunk}: {msg}");
                    return Err(SchedulerError::WorkerFailure {
                        chunk: chunk.to_string(),
                        msg,
                    });
                }
            }
        }
        eprintln!();

        if batch.completed() != total {
            log::error!(
                "only {} of {} OD cost matrix results were retrieved",
                batch.completed(),
                total
            );
            return Err(SchedulerError::ResultsNotRetrieved {
                expected: total,
                received: batch.completed(),
            });
        }
        Ok(batch)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| String::from("unknown panic"))
}
