use super::{ChunkSolver, ChunkSolverConfig, SolverError};
use odaccess_core::model::chunk::{Chunk, JobOutcome};
use std::sync::Arc;

/// worker entry point: solves a single chunk with its own solver instance.
pub fn solve_chunk(config: Arc<ChunkSolverConfig>, chunk: Chunk) -> Result<JobOutcome, SolverError> {
    ChunkSolver::new(config)?.solve(&chunk)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ChunkSolverConfig;
    use crate::model::{
        dataset::CsvFeatureSource,
        skim::{SkimEngine, SkimRow},
    };
    use chrono::NaiveDate;
    use odaccess_core::model::{
        chunk::{Chunk, ChunkFileCodec},
        engine::{TimeUnits, TravelMode},
        partition::IdRange,
        tool::ResultSchema,
    };
    use std::{path::Path, sync::Arc};

    pub fn time_mode() -> TravelMode {
        TravelMode {
            name: String::from("transit"),
            impedance: String::from("PublicTransitTime"),
            time_attribute: String::from("PublicTransitTime"),
        }
    }

    pub fn chunk(origins: IdRange, destinations: IdRange, hh: u32, mm: u32) -> Chunk {
        Chunk::new(
            origins,
            destinations,
            NaiveDate::from_ymd_opt(1900, 1, 3)
                .unwrap()
                .and_hms_opt(hh, mm, 0)
                .unwrap(),
        )
    }

    /// origins 1-2, destinations 1-3; only origin 1 reaches destination 2,
    /// and only when leaving at 08:00.
    pub fn solver_config(
        dir: &Path,
        schema: ResultSchema,
        mode: TravelMode,
    ) -> Arc<ChunkSolverConfig> {
        let origins_path = dir.join("origins.csv");
        std::fs::write(&origins_path, "ObjectID\n1\n2\n").unwrap();
        let destinations_path = dir.join("destinations.csv");
        std::fs::write(&destinations_path, "ObjectID\n1\n2\n3\n").unwrap();
        let engine = SkimEngine::new(
            String::from("test"),
            vec![mode],
            vec![SkimRow {
                origin_id: 1,
                destination_id: 2,
                departure_time: String::from("08:00"),
                travel_time: 12.0,
            }],
        )
        .unwrap();
        Arc::new(ChunkSolverConfig {
            engine: Arc::new(engine),
            origins: Arc::new(CsvFeatureSource::from_path(&origins_path, "ObjectID").unwrap()),
            destinations: Arc::new(
                CsvFeatureSource::from_path(&destinations_path, "ObjectID").unwrap(),
            ),
            schema,
            destination_filter_field: None,
            travel_mode: String::from("transit"),
            time_units: TimeUnits::Minutes,
            cutoff: None,
            barriers: vec![],
            properties: serde_json::Map::new(),
            scratch_folder: dir.to_path_buf(),
            output_folder: dir.to_path_buf(),
            codec: ChunkFileCodec::V1,
        })
    }
}
