use super::{ChunkSolverConfig, JobLogger, SolverError, PROPERTIES_SET_BY_TOOL};
use odaccess_core::model::{
    chunk::{Chunk, JobOutcome},
    engine::{FeatureFilter, OdLine, SolveRequest, TravelMode, NO_DESTINATIONS_FOUND_PREFIX},
};
use std::{path::PathBuf, sync::Arc, time::Instant};
use uuid::Uuid;

/// solves one chunk: loads the chunk's origins and destinations, runs the
/// routing engine at the chunk's departure instant and writes the reached
/// pairs to the chunk's result file.
pub struct ChunkSolver {
    config: Arc<ChunkSolverConfig>,
    job_id: String,
    logger: JobLogger,
}

/// engine settings resolved once per solver
struct PreparedSolve {
    travel_mode: TravelMode,
    properties: serde_json::Map<String, serde_json::Value>,
}

impl ChunkSolver {
    /// creates a solver with a fresh job id and its own log file in the
    /// scratch folder.
    pub fn new(config: Arc<ChunkSolverConfig>) -> Result<ChunkSolver, SolverError> {
        let job_id = Uuid::new_v4().simple().to_string();
        let logger = JobLogger::to_file(&config.scratch_folder, &job_id)?;
        Ok(ChunkSolver {
            config,
            job_id,
            logger,
        })
    }

    /// resolves the engine settings without solving anything, logging to the
    /// process logger. used to reject a bad configuration before any
    /// parallel work starts.
    pub fn dry_run(config: Arc<ChunkSolverConfig>) -> Result<TravelMode, SolverError> {
        let mut solver = ChunkSolver {
            config,
            job_id: String::from("validation"),
            logger: JobLogger::process_only("validation"),
        };
        solver.initialize().map(|prepared| prepared.travel_mode)
    }

    fn initialize(&mut self) -> Result<PreparedSolve, SolverError> {
        let config = self.config.clone();
        self.logger.debug(&format!(
            "Setting up {} solve with travel mode '{}'...",
            config.engine.name(),
            config.travel_mode
        ));
        let travel_mode = config
            .engine
            .resolve_travel_mode(&config.travel_mode)
            .map_err(|e| SolverError::InvalidTravelMode {
                name: config.travel_mode.clone(),
                reason: e.to_string(),
            })?;
        if !travel_mode.is_time_based() {
            let reason = format!(
                "the impedance units of the selected travel mode {} are not time based",
                travel_mode.name
            );
            self.logger.error(&reason);
            return Err(SolverError::InvalidTravelMode {
                name: travel_mode.name,
                reason,
            });
        }

        let recognized = config.engine.recognized_properties();
        let mut properties = serde_json::Map::new();
        for (name, value) in config.properties.iter() {
            if PROPERTIES_SET_BY_TOOL.contains(&name.as_str()) {
                self.logger.warn(&format!(
                    "solver property {name} is handled explicitly by the tool parameters and will be ignored."
                ));
            } else if !recognized.contains(name) {
                self.logger.warn(&format!(
                    "Failed to set solver property {name}. Default will be used instead."
                ));
            } else {
                properties.insert(name.clone(), value.clone());
            }
        }
        Ok(PreparedSolve {
            travel_mode,
            properties,
        })
    }

    /// runs the chunk. a routine solve failure yields an outcome with
    /// `succeeded == false`; an `Err` means the job could not be run at all.
    /// the job log is closed when this returns.
    pub fn solve(mut self, chunk: &Chunk) -> Result<JobOutcome, SolverError> {
        let result = self.run(chunk);
        if let Err(e) = &result {
            self.logger.error(&format!("job {} failed: {}", self.job_id, e));
        }
        self.logger.close();
        result
    }

    fn run(&mut self, chunk: &Chunk) -> Result<JobOutcome, SolverError> {
        self.logger.info(&format!("Processing {chunk}"));
        let prepared = self.initialize()?;
        let config = self.config.clone();

        self.logger.debug("Loading origins...");
        let origins = config
            .origins
            .object_ids(&FeatureFilter::all().within(chunk.origin_range))?;
        self.logger.debug("Loading destinations...");
        let destination_filter = FeatureFilter::all()
            .within(chunk.destination_range)
            .with_non_zero(config.destination_filter_field.as_deref());
        let destinations = config.destinations.object_ids(&destination_filter)?;

        let request = SolveRequest {
            origins,
            destinations,
            travel_mode: prepared.travel_mode,
            departure: chunk.departure,
            cutoff: config.cutoff,
            time_units: config.time_units,
            barriers: config.barriers.clone(),
            properties: prepared.properties,
            schema: config.schema,
        };

        self.logger.debug("Solving OD cost matrix...");
        let start = Instant::now();
        let response = config.engine.solve(&request)?;
        self.logger.debug(&format!(
            "Solving OD cost matrix completed in {:.3} (seconds).",
            start.elapsed().as_secs_f64()
        ));

        for msg in response.messages.iter() {
            self.logger.debug(msg);
        }
        let (messages, collapsed) = collapse_messages(response.messages);
        if collapsed > 0 {
            self.logger.debug(&format!(
                "Repetitive messages starting with {NO_DESTINATIONS_FOUND_PREFIX} were consolidated."
            ));
        }

        let log_file = self.logger.path().map(PathBuf::from).unwrap_or_default();
        if !response.succeeded {
            self.logger.debug("Solve failed.");
            return Ok(JobOutcome {
                job_id: self.job_id.clone(),
                succeeded: false,
                messages,
                result_file: None,
                log_file,
            });
        }
        self.logger.debug("Solve succeeded.");

        let result_file = self.write_result_file(chunk, &response.rows)?;
        self.logger.debug("Finished calculating OD cost matrix.");
        Ok(JobOutcome {
            job_id: self.job_id.clone(),
            succeeded: true,
            messages,
            result_file: Some(result_file),
            log_file,
        })
    }

    fn write_result_file(&mut self, chunk: &Chunk, rows: &[OdLine]) -> Result<PathBuf, SolverError> {
        let path = self
            .config
            .output_folder
            .join(self.config.codec.encode(chunk));
        let write_error = |msg: String| SolverError::ResultWriteError {
            filepath: path.to_string_lossy().to_string(),
            msg,
        };
        self.logger
            .debug(&format!("Writing {} OD lines to {}", rows.len(), path.display()));
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .map_err(|e| write_error(e.to_string()))?;
        let schema = self.config.schema;
        writer
            .write_record(schema.columns())
            .map_err(|e| write_error(e.to_string()))?;
        for row in rows {
            let mut record = vec![row.origin_id.to_string(), row.destination_id.to_string()];
            if schema.includes_travel_time() {
                let time = row.total_time.ok_or_else(|| {
                    write_error(format!(
                        "no travel time for origin {} destination {}",
                        row.origin_id, row.destination_id
                    ))
                })?;
                record.push(time.to_string());
            }
            writer
                .write_record(&record)
                .map_err(|e| write_error(e.to_string()))?;
        }
        writer.flush().map_err(|e| write_error(e.to_string()))?;
        Ok(path)
    }
}

/// replaces the per-origin "no destinations found" messages with a single
/// count. returns the remaining messages and how many were collapsed.
pub fn collapse_messages(messages: Vec<String>) -> (Vec<String>, usize) {
    let initial = messages.len();
    let mut kept: Vec<String> = messages
        .into_iter()
        .filter(|m| !m.starts_with(NO_DESTINATIONS_FOUND_PREFIX))
        .collect();
    let removed = initial - kept.len();
    if removed > 0 {
        kept.push(format!("No destinations were found for {removed} origins."));
    }
    (kept, removed)
}
