use super::{
    BatchResult, OdcmInputs, OdcmOutput, ParallelScheduler, RunConfig, RunReport, SchedulerError,
};
use crate::model::solver::{solver_ops, ChunkSolver, ChunkSolverConfig};
use odaccess_core::model::{
    aggregation::{
        AccessibilityAggregator, AggregationError, DestinationWeights, TravelTimeAggregator,
    },
    chunk::{chunk_ops, ChunkFileCodec},
    engine::FeatureFilter,
    partition::{partition_ops, IdRange},
    tool::OdTool,
};
use std::{
    path::Path,
    sync::Arc,
    time::Instant,
};
use uuid::Uuid;

/// computes OD cost matrices for every chunk of origins, destinations and
/// departure times in parallel, then aggregates the chunk results for the
/// selected tool.
pub struct ParallelOdCalculator {
    inputs: OdcmInputs,
    run_config: RunConfig,
    codec: ChunkFileCodec,
}

impl ParallelOdCalculator {
    /// validates the inputs. nothing is written until [`ParallelOdCalculator::run`].
    pub fn new(
        inputs: OdcmInputs,
        run_config: RunConfig,
    ) -> Result<ParallelOdCalculator, SchedulerError> {
        let calculator = ParallelOdCalculator {
            inputs,
            run_config,
            codec: ChunkFileCodec::V1,
        };
        calculator.validate()?;
        Ok(calculator)
    }

    fn validate(&self) -> Result<(), SchedulerError> {
        let inputs = &self.inputs;
        let invalid = |msg: String| Err(SchedulerError::InvalidInput(msg));
        if inputs.max_origins < 1 {
            return invalid(String::from("maximum origins per chunk must be at least 1"));
        }
        if inputs.max_destinations < 1 {
            return invalid(String::from(
                "maximum destinations per chunk must be at least 1",
            ));
        }
        let max_allowed = self.run_config.max_allowed_processes;
        if inputs.max_processes < 1 || inputs.max_processes > max_allowed {
            return invalid(format!(
                "maximum parallel processes must be between 1 and {max_allowed}, found {}",
                inputs.max_processes
            ));
        }
        if let Some(cutoff) = inputs.cutoff {
            if cutoff <= 0.0 {
                return invalid(format!("cutoff must be greater than 0, found {cutoff}"));
            }
        }
        if inputs.origins.count() == 0 {
            return invalid(format!("{} has no rows", inputs.origins.name()));
        }
        if inputs.destinations.count() == 0 {
            return invalid(format!("{} has no rows", inputs.destinations.name()));
        }
        if let Some(field) = inputs.tool.destination_filter_field() {
            if !inputs.destinations.has_field(field) {
                return invalid(format!(
                    "weight field {field} does not exist in {}",
                    inputs.destinations.name()
                ));
            }
            // every non-empty weight must be numeric
            let weights = inputs
                .destinations
                .field_values(field, &FeatureFilter::all())?;
            let null_count = weights.iter().filter(|(_, w)| w.is_none()).count();
            if null_count > 0 {
                log::warn!(
                    "{null_count} destinations have null values for the weight field {field}. These destinations will be counted with a weight of 0."
                );
            }
        }
        if let Some(missing) = inputs.barriers.iter().find(|b| !b.exists()) {
            return invalid(format!("barrier file {} does not exist", missing.display()));
        }
        if let OdTool::TravelTime { output_csv } = &inputs.tool {
            let parent = output_csv.parent().filter(|p| !p.as_os_str().is_empty());
            if let Some(folder) = parent.filter(|p| !p.is_dir()) {
                return invalid(format!(
                    "output folder {} does not exist",
                    folder.display()
                ));
            }
        }
        Ok(())
    }

    pub fn run(&self) -> Result<RunReport, SchedulerError> {
        let start = Instant::now();
        let inputs = &self.inputs;

        let scratch_folder = self
            .run_config
            .scratch_root()
            .join(format!("odcm_{}", Uuid::new_v4().simple()));
        create_folder(&scratch_folder)?;
        log::info!(
            "Intermediate outputs will be written to {}.",
            scratch_folder.display()
        );
        let output_folder = match &inputs.output_folder {
            Some(folder) => {
                create_folder(folder)?;
                folder.clone()
            }
            None => scratch_folder.clone(),
        };

        let destination_filter = self.destination_filter();
        let solver_config = Arc::new(ChunkSolverConfig {
            engine: inputs.engine.clone(),
            origins: inputs.origins.clone(),
            destinations: inputs.destinations.clone(),
            schema: inputs.tool.schema(),
            destination_filter_field: destination_filter.non_zero_field.clone(),
            travel_mode: inputs.travel_mode.clone(),
            time_units: inputs.time_units,
            cutoff: inputs.cutoff,
            barriers: inputs.barriers.clone(),
            properties: self.run_config.solver.clone(),
            scratch_folder: scratch_folder.clone(),
            output_folder: output_folder.clone(),
            codec: self.codec,
        });

        log::debug!("Validating OD Cost Matrix settings...");
        if let Err(e) = ChunkSolver::dry_run(solver_config.clone()) {
            log::error!("Error initializing OD Cost Matrix analysis: {e}");
            return Err(SchedulerError::Validation(e));
        }
        log::debug!("OD Cost Matrix settings successfully validated.");

        let (origin_ranges, destination_ranges) = self.id_ranges()?;
        let departures = inputs.time_window.departures().collect::<Vec<_>>();
        let chunks = chunk_ops::chunk_universe(&origin_ranges, &destination_ranges, &departures);
        log::info!(
            "Solving OD Cost Matrix in parallel ({} chunks: {} origin ranges, {} destination ranges, {} start times)...",
            chunks.len(),
            origin_ranges.len(),
            destination_ranges.len(),
            departures.len()
        );

        let scheduler = ParallelScheduler::new(inputs.max_processes);
        let task_config = solver_config.clone();
        let batch = scheduler.run(chunks, move |chunk| {
            solver_ops::solve_chunk(task_config.clone(), chunk)
        })?;

        let output = if batch.succeeded.is_empty() {
            log::warn!("All OD Cost Matrix solves failed, so no output was produced.");
            OdcmOutput::NoResults
        } else {
            let output = self.aggregate(&batch, &origin_ranges, departures.len())?;
            if inputs.output_folder.is_some() {
                log::info!(
                    "Individual network analysis results written to {}.",
                    output_folder.display()
                );
            }
            output
        };

        if self.run_config.delete_intermediate_outputs {
            log::info!("Deleting intermediate outputs...");
            if let Err(e) = std::fs::remove_dir_all(&scratch_folder) {
                log::warn!(
                    "Unable to delete intermediate OD Cost Matrix output folder {}: {}",
                    scratch_folder.display(),
                    e
                );
            }
        }

        let elapsed = start.elapsed();
        log::info!(
            "Finished calculating OD Cost Matrices in {:.2} minutes.",
            elapsed.as_secs_f64() / 60.0
        );
        Ok(RunReport {
            batch,
            output,
            scratch_folder,
            elapsed,
        })
    }

    /// destinations with a null or zero weight are left out of the analysis.
    fn destination_filter(&self) -> FeatureFilter {
        FeatureFilter::all().with_non_zero(self.inputs.tool.destination_filter_field())
    }

    /// origin and destination id ranges that chunks are built from.
    fn id_ranges(&self) -> Result<(Vec<IdRange>, Vec<IdRange>), SchedulerError> {
        let inputs = &self.inputs;
        let origin_ranges = partition_ops::partition_ids(
            inputs.origins.object_ids(&FeatureFilter::all())?,
            inputs.max_origins,
        )?;
        let destination_ranges = partition_ops::partition_ids(
            inputs.destinations.object_ids(&self.destination_filter())?,
            inputs.max_destinations,
        )?;
        Ok((origin_ranges, destination_ranges))
    }

    fn aggregate(
        &self,
        batch: &BatchResult,
        origin_ranges: &[IdRange],
        sample_count: usize,
    ) -> Result<OdcmOutput, SchedulerError> {
        let result_files = batch.result_files();
        match &self.inputs.tool {
            OdTool::Accessibility { weight_field, .. } => {
                log::info!("Calculating statistics for final output...");
                let weights = DestinationWeights::from_source(
                    self.inputs.destinations.as_ref(),
                    weight_field.as_deref(),
                )?;
                let origin_ids = self.inputs.origins.object_ids(&FeatureFilter::all())?;
                let table = AccessibilityAggregator::new(self.codec, &weights, sample_count)
                    .aggregate(&result_files, &origin_ids)?;
                Ok(OdcmOutput::Accessibility(table))
            }
            OdTool::TravelTime { output_csv } => {
                log::info!("Calculating travel time statistics...");
                if output_csv.exists() {
                    std::fs::remove_file(output_csv).map_err(|source| {
                        SchedulerError::FolderError {
                            path: output_csv.to_string_lossy().to_string(),
                            source,
                        }
                    })?;
                }
                let mut writer = csv::Writer::from_path(output_csv).map_err(|e| {
                    AggregationError::WriteError(format!(
                        "cannot create {}: {e}",
                        output_csv.display()
                    ))
                })?;
                let rows = TravelTimeAggregator::new(self.codec).aggregate(
                    &result_files,
                    origin_ranges,
                    &mut writer,
                )?;
                log::info!(
                    "Travel time statistics written to {}.",
                    output_csv.display()
                );
                Ok(OdcmOutput::TravelTime {
                    output_csv: output_csv.clone(),
                    rows,
                })
            }
        }
    }
}

fn create_folder(path: &Path) -> Result<(), SchedulerError> {
    std::fs::create_dir_all(path).map_err(|source| SchedulerError::FolderError {
        path: path.to_string_lossy().to_string(),
        source,
    })
}
