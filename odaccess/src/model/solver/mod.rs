mod chunk_solver;
mod chunk_solver_config;
mod job_logger;
mod solver_error;
pub mod solver_ops;

pub use chunk_solver::ChunkSolver;
pub use chunk_solver_config::{ChunkSolverConfig, PROPERTIES_SET_BY_TOOL};
pub use job_logger::{JobLogger, JOB_LOG_TARGET};
pub use solver_error::SolverError;
