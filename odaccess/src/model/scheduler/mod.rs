mod batch_result;
mod odcm_inputs;
mod odcm_output;
mod parallel_od_calculator;
mod parallel_scheduler;
mod run_config;
mod scheduler_error;

pub use batch_result::BatchResult;
pub use odcm_inputs::OdcmInputs;
pub use odcm_output::{OdcmOutput, RunReport};
pub use parallel_od_calculator::ParallelOdCalculator;
pub use parallel_scheduler::ParallelScheduler;
pub use run_config::{RunConfig, DEFAULT_MAX_ALLOWED_PROCESSES};
pub use scheduler_error::SchedulerError;
