use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_ALLOWED_PROCESSES: usize = 61;
pub const RUN_CONFIG_ENV_PREFIX: &str = "ODACCESS";

/// settings for a run that are not part of the analysis inputs. read from an
/// optional TOML file and `ODACCESS_*` environment variables.
///
/// ```toml
/// delete_intermediate_outputs = true
/// max_allowed_processes = 61
///
/// [solver]
/// departure_window = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// remove the scratch folder once the run finishes successfully
    pub delete_intermediate_outputs: bool,
    /// parent of the per-run scratch folder, the system temp folder if unset
    pub scratch_root: Option<PathBuf>,
    /// upper limit for the number of parallel workers
    pub max_allowed_processes: usize,
    /// engine properties passed to every solve
    pub solver: serde_json::Map<String, serde_json::Value>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            delete_intermediate_outputs: true,
            scratch_root: None,
            max_allowed_processes: DEFAULT_MAX_ALLOWED_PROCESSES,
            solver: serde_json::Map::new(),
        }
    }
}

impl RunConfig {
    pub fn load(filepath: Option<&Path>) -> Result<RunConfig, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = filepath {
            builder = builder.add_source(config::File::new(
                &path.to_string_lossy(),
                config::FileFormat::Toml,
            ));
        }
        builder
            .add_source(config::Environment::with_prefix(RUN_CONFIG_ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn scratch_root(&self) -> PathBuf {
        self.scratch_root.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::{RunConfig, DEFAULT_MAX_ALLOWED_PROCESSES};

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(
            &path,
            "delete_intermediate_outputs = false\n\n[solver]\ndeparture_window = 10\n",
        )
        .unwrap();
        let config = RunConfig::load(Some(&path)).unwrap();
        assert!(!config.delete_intermediate_outputs);
        assert_eq!(config.max_allowed_processes, DEFAULT_MAX_ALLOWED_PROCESSES);
        assert_eq!(config.solver.get("departure_window"), Some(&serde_json::json!(10)));
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert!(config.delete_intermediate_outputs);
        assert!(config.solver.is_empty());
        assert_eq!(config.scratch_root(), std::env::temp_dir());
    }
}
