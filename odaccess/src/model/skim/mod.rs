mod network_config;
mod skim_engine;
mod skim_row;

pub use network_config::NetworkConfig;
pub use skim_engine::{SkimEngine, DEPARTURE_WINDOW_PROPERTY};
pub use skim_row::SkimRow;
