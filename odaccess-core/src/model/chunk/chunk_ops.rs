use super::Chunk;
use crate::model::partition::IdRange;
use chrono::NaiveDateTime;
use itertools::iproduct;

/// the full chunk universe: every combination of origin range, destination
/// range and departure instant. empty when any input is empty.
pub fn chunk_universe(
    origin_ranges: &[IdRange],
    destination_ranges: &[IdRange],
    departures: &[NaiveDateTime],
) -> Vec<Chunk> {
    iproduct!(origin_ranges, destination_ranges, departures)
        .map(|(o, d, t)| Chunk::new(*o, *d, *t))
        .collect()
}
