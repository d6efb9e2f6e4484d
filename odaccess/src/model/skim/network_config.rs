use odaccess_core::model::engine::{EngineError, TravelMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// network description file. relative skim paths are resolved against the
/// directory holding the network file.
///
/// ```toml
/// skim_file = "skim.csv"
///
/// [[travel_modes]]
/// name = "Public transit time"
/// impedance = "PublicTransitTime"
/// time_attribute = "PublicTransitTime"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub skim_file: PathBuf,
    pub travel_modes: Vec<TravelMode>,
}

impl NetworkConfig {
    pub fn from_file(filepath: &Path) -> Result<NetworkConfig, EngineError> {
        let read_error = |msg: String| EngineError::NetworkReadError {
            filepath: filepath.to_string_lossy().to_string(),
            msg,
        };
        let config = config::Config::builder()
            .add_source(config::File::new(
                &filepath.to_string_lossy(),
                config::FileFormat::Toml,
            ))
            .build()
            .map_err(|e| read_error(e.to_string()))?;
        let mut network: NetworkConfig = config
            .try_deserialize()
            .map_err(|e| read_error(e.to_string()))?;
        if network.skim_file.is_relative() {
            if let Some(parent) = filepath.parent() {
                network.skim_file = parent.join(&network.skim_file);
            }
        }
        Ok(network)
    }
}
