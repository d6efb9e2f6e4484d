use super::{NetworkConfig, SkimRow};
use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use odaccess_core::model::{
    engine::{
        EngineError, OdLine, RoutingEngine, SolveRequest, SolveResponse, TravelMode,
        NO_DESTINATIONS_FOUND_PREFIX,
    },
    time_window::TIME_OF_DAY_FORMAT,
    ObjectId,
};
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    path::Path,
};

/// minutes after the requested departure during which a skim departure may
/// still be boarded. the wait is added to the travel time.
pub const DEPARTURE_WINDOW_PROPERTY: &str = "departure_window";

#[derive(Debug, Clone, Copy)]
struct SkimEntry {
    destination_id: ObjectId,
    departure: NaiveTime,
    minutes: f64,
}

/// routing engine backed by a precomputed time-of-day travel time table.
pub struct SkimEngine {
    name: String,
    travel_modes: Vec<TravelMode>,
    entries: HashMap<ObjectId, Vec<SkimEntry>>,
}

impl SkimEngine {
    pub fn from_network_file(filepath: &Path) -> Result<SkimEngine, EngineError> {
        let network = NetworkConfig::from_file(filepath)?;
        let rows = read_skim_rows(&network.skim_file)?;
        SkimEngine::new(
            filepath.to_string_lossy().to_string(),
            network.travel_modes,
            rows,
        )
    }

    pub fn new(
        name: String,
        travel_modes: Vec<TravelMode>,
        rows: Vec<SkimRow>,
    ) -> Result<SkimEngine, EngineError> {
        let mut entries: HashMap<ObjectId, Vec<SkimEntry>> = HashMap::new();
        for row in rows {
            let departure = NaiveTime::parse_from_str(row.departure_time.trim(), TIME_OF_DAY_FORMAT)
                .map_err(|e| {
                    EngineError::InternalError(format!(
                        "skim row {} -> {} has invalid departure time '{}': {e}",
                        row.origin_id, row.destination_id, row.departure_time
                    ))
                })?;
            entries.entry(row.origin_id).or_default().push(SkimEntry {
                destination_id: row.destination_id,
                departure,
                minutes: row.travel_time,
            });
        }
        log::debug!(
            "skim engine {} loaded with {} origins and {} travel modes",
            name,
            entries.len(),
            travel_modes.len()
        );
        Ok(SkimEngine {
            name,
            travel_modes,
            entries,
        })
    }

    fn departure_window(request: &SolveRequest) -> Result<TimeDelta, EngineError> {
        match request.properties.get(DEPARTURE_WINDOW_PROPERTY) {
            None => Ok(TimeDelta::zero()),
            Some(value) => value
                .as_i64()
                .filter(|m| *m >= 0)
                .and_then(TimeDelta::try_minutes)
                .ok_or_else(|| EngineError::InvalidProperty {
                    name: String::from(DEPARTURE_WINDOW_PROPERTY),
                    reason: format!("expected a non-negative whole number of minutes, found {value}"),
                }),
        }
    }
}

impl RoutingEngine for SkimEngine {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn resolve_travel_mode(&self, name: &str) -> Result<TravelMode, EngineError> {
        self.travel_modes
            .iter()
            .find(|m| m.name == name)
            .cloned()
            .ok_or_else(|| EngineError::UnknownTravelMode {
                name: name.to_string(),
                available: self.travel_modes.iter().map(|m| m.name.clone()).collect(),
            })
    }

    fn recognized_properties(&self) -> Vec<String> {
        vec![String::from(DEPARTURE_WINDOW_PROPERTY)]
    }

    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, EngineError> {
        let window = SkimEngine::departure_window(request)?;
        let cutoff_minutes = request.cutoff.map(|c| request.time_units.to_minutes(c));
        let closed = read_barriers(&request.barriers)?;
        let destinations: HashSet<ObjectId> = request
            .destinations
            .iter()
            .filter(|d| !closed.contains(d))
            .copied()
            .collect();
        let leave_at = request.departure;

        let mut rows = vec![];
        let mut messages = vec![];
        for origin in request.origins.iter() {
            let mut best: BTreeMap<ObjectId, f64> = BTreeMap::new();
            if !closed.contains(origin) {
                for entry in self.entries.get(origin).into_iter().flatten() {
                    if !destinations.contains(&entry.destination_id) {
                        continue;
                    }
                    let wait = next_boarding(leave_at, entry.departure) - leave_at;
                    if wait > window {
                        continue;
                    }
                    let total = entry.minutes + wait.num_seconds() as f64 / 60.0;
                    if cutoff_minutes.map(|c| total > c).unwrap_or(false) {
                        continue;
                    }
                    best.entry(entry.destination_id)
                        .and_modify(|t| *t = t.min(total))
                        .or_insert(total);
                }
            }
            if best.is_empty() {
                messages.push(format!(
                    "{NO_DESTINATIONS_FOUND_PREFIX}\"Location {origin}\" in \"Origins\"."
                ));
            }
            for (destination, minutes) in best {
                let total_time = request
                    .schema
                    .includes_travel_time()
                    .then(|| request.time_units.from_minutes(minutes));
                rows.push(OdLine::new(*origin, destination, total_time));
            }
        }

        if rows.is_empty() {
            messages.push(String::from("No solution found."));
            Ok(SolveResponse::failure(messages))
        } else {
            Ok(SolveResponse::success(rows, messages))
        }
    }
}

/// first instant at or after `leave_at` with the given time of day. skim
/// departures repeat daily, so a window may wrap past midnight.
fn next_boarding(leave_at: NaiveDateTime, departure: NaiveTime) -> NaiveDateTime {
    let same_day = leave_at.date().and_time(departure);
    if same_day < leave_at {
        same_day + TimeDelta::days(1)
    } else {
        same_day
    }
}

fn read_skim_rows(filepath: &Path) -> Result<Vec<SkimRow>, EngineError> {
    let read_error = |msg: String| EngineError::NetworkReadError {
        filepath: filepath.to_string_lossy().to_string(),
        msg,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(filepath)
        .map_err(|e| read_error(e.to_string()))?;
    reader
        .deserialize::<SkimRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| read_error(e.to_string()))
}

/// reads closed location ids from barrier files, one id per row in the first
/// column after a header row.
fn read_barriers(barriers: &[std::path::PathBuf]) -> Result<HashSet<ObjectId>, EngineError> {
    let mut closed = HashSet::new();
    for path in barriers {
        let read_error = |msg: String| EngineError::BarrierReadError {
            filepath: path.to_string_lossy().to_string(),
            msg,
        };
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| read_error(e.to_string()))?;
        for record in reader.records() {
            let record = record.map_err(|e| read_error(e.to_string()))?;
            let id = record
                .get(0)
                .and_then(|v| v.parse::<ObjectId>().ok())
                .ok_or_else(|| read_error(format!("invalid location id in row {record:?}")))?;
            closed.insert(id);
        }
    }
    Ok(closed)
}
