pub mod dataset;
pub mod output;
pub mod scheduler;
pub mod skim;
pub mod solver;
