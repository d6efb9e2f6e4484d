use super::{OdcmAppError, OdcmOperation};
use crate::model::scheduler::RunConfig;
use clap::Parser;
use std::path::PathBuf;

/// computes time-of-day origin-destination accessibility and travel time
/// statistics by solving many OD cost matrices in parallel
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct OdcmApp {
    #[command(subcommand)]
    pub op: OdcmOperation,
    /// TOML run settings. `ODACCESS_*` environment variables override it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl OdcmApp {
    pub fn run(&self) -> Result<(), OdcmAppError> {
        let run_config = RunConfig::load(self.config.as_deref()).map_err(|source| {
            OdcmAppError::ConfigReadError {
                msg: match &self.config {
                    Some(path) => format!("failed reading '{}'", path.display()),
                    None => String::from("failed reading run settings from the environment"),
                },
                source,
            }
        })?;
        log::debug!("run settings: {run_config:?}");
        self.op.run(run_config)
    }
}
