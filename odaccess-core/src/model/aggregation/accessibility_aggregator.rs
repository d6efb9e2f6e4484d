use super::{
    result_file_ops, AccessibilityRecord, AccessibilityTable, AggregationError,
    DestinationWeights, DECILES,
};
use crate::model::{chunk::ChunkFileCodec, partition::IdRange, ObjectId};
use rayon::prelude::*;
use std::{collections::BTreeMap, path::PathBuf};

/// folds chunk result files into per-origin reachability statistics.
///
/// result files are merged one origin range at a time, so only the
/// (origin, destination) reach counts of a single origin range are held in
/// memory at once. origin ranges are processed in parallel.
pub struct AccessibilityAggregator<'a> {
    codec: ChunkFileCodec,
    weights: &'a DestinationWeights,
    sample_count: usize,
}

impl<'a> AccessibilityAggregator<'a> {
    /// # Arguments
    ///
    /// * `codec` - naming scheme of the result files
    /// * `weights` - destination weights and their total
    /// * `sample_count` - number of departure instants in the time window
    pub fn new(
        codec: ChunkFileCodec,
        weights: &'a DestinationWeights,
        sample_count: usize,
    ) -> AccessibilityAggregator<'a> {
        AccessibilityAggregator {
            codec,
            weights,
            sample_count,
        }
    }

    /// minimum reach count for each decile. thresholds are not rounded, a
    /// pair qualifies when its reach count is at least the threshold.
    pub fn thresholds(&self) -> [f64; 9] {
        DECILES.map(|p| (self.sample_count as f64) * (p as f64) / 100.0)
    }

    /// builds the statistics table. every id in `origin_ids` receives a
    /// record, all zeros when it appears in no result file.
    pub fn aggregate(
        &self,
        result_files: &[PathBuf],
        origin_ids: &[ObjectId],
    ) -> Result<AccessibilityTable, AggregationError> {
        let groups = result_file_ops::group_by_origin_range(&self.codec, result_files)?;
        let group_records = groups
            .par_iter()
            .map(|(range, files)| self.aggregate_origin_range(range, files))
            .collect::<Result<Vec<_>, _>>()?;

        let mut records = BTreeMap::new();
        for group in group_records {
            records.extend(group);
        }
        for id in origin_ids {
            records
                .entry(*id)
                .or_insert_with(|| AccessibilityRecord::empty(*id));
        }
        Ok(AccessibilityTable::new(records, self.weights.is_integral()))
    }

    fn aggregate_origin_range(
        &self,
        range: &IdRange,
        files: &[PathBuf],
    ) -> Result<BTreeMap<ObjectId, AccessibilityRecord>, AggregationError> {
        // each file holds one departure instant, so a pair's reach count is
        // the number of files it appears in
        let mut times_reached: BTreeMap<(ObjectId, ObjectId), u32> = BTreeMap::new();
        for file in files {
            result_file_ops::for_each_od_line(file, |line| {
                *times_reached
                    .entry((line.origin_id, line.destination_id))
                    .or_default() += 1;
                Ok(())
            })?;
        }
        log::debug!(
            "origins {}: {} result files, {} reached pairs",
            range,
            files.len(),
            times_reached.len()
        );

        let thresholds = self.thresholds();
        let mut records: BTreeMap<ObjectId, AccessibilityRecord> = BTreeMap::new();
        for ((origin, destination), count) in times_reached {
            let weight = self.weights.weight(destination);
            let record = records
                .entry(origin)
                .or_insert_with(|| AccessibilityRecord::empty(origin));
            if count > 0 {
                record.total_dests += weight;
            }
            for (i, threshold) in thresholds.iter().enumerate() {
                if count as f64 >= *threshold {
                    record.dests_at_least[i] += weight;
                }
            }
        }
        for record in records.values_mut() {
            record.perc_dests = self.weights.percent_of_total(record.total_dests);
            for i in 0..DECILES.len() {
                record.perc_at_least[i] = self.weights.percent_of_total(record.dests_at_least[i]);
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::AccessibilityAggregator;
    use crate::model::{
        aggregation::{result_file_ops::test_files::*, DestinationWeights},
        chunk::ChunkFileCodec,
        engine::OdLine,
        partition::IdRange,
    };
    use std::path::PathBuf;

    fn pairs(rows: &[(u64, u64)]) -> Vec<OdLine> {
        rows.iter().map(|(o, d)| OdLine::new(*o, *d, None)).collect()
    }

    #[test]
    fn test_two_of_three_samples() {
        // O1 reaches D1 at 08:00 and 09:00 but not 08:30, never D2
        let dir = tempfile::tempdir().unwrap();
        let origins = IdRange::new(1, 1);
        let destinations = IdRange::new(1, 2);
        let files = vec![
            write_chunk_file(dir.path(), origins, destinations, departure(8, 0), &pairs(&[(1, 1)])),
            write_chunk_file(dir.path(), origins, destinations, departure(9, 0), &pairs(&[(1, 1)])),
        ];
        let weights = DestinationWeights::uniform(2);
        let aggregator = AccessibilityAggregator::new(ChunkFileCodec::V1, &weights, 3);
        let table = aggregator.aggregate(&files, &[1]).unwrap();
        let record = table.get(1).unwrap();
        assert_eq!(record.total_dests, 1.0);
        assert_eq!(record.perc_dests, 50.0);
        for i in 0..6 {
            assert_eq!(record.dests_at_least[i], 1.0, "decile index {i}");
            assert_eq!(record.perc_at_least[i], 50.0, "decile index {i}");
        }
        for i in 6..9 {
            assert_eq!(record.dests_at_least[i], 0.0, "decile index {i}");
            assert_eq!(record.perc_at_least[i], 0.0, "decile index {i}");
        }
        assert!(table.is_integral());
    }

    #[test]
    fn test_threshold_equality_qualifies() {
        // 10 samples, p=10 gives threshold 1.0 which a single reach satisfies
        let weights = DestinationWeights::uniform(1);
        let aggregator = AccessibilityAggregator::new(ChunkFileCodec::V1, &weights, 10);
        let thresholds = aggregator.thresholds();
        assert_eq!(thresholds[0], 1.0);
        assert_eq!(thresholds[8], 9.0);

        let dir = tempfile::tempdir().unwrap();
        let files = vec![write_chunk_file(
            dir.path(),
            IdRange::new(1, 1),
            IdRange::new(1, 1),
            departure(8, 0),
            &pairs(&[(1, 1)]),
        )];
        let table = aggregator.aggregate(&files, &[1]).unwrap();
        let record = table.get(1).unwrap();
        assert_eq!(record.dests_at_least[0], 1.0);
        assert_eq!(record.dests_at_least[1], 0.0);
    }

    #[test]
    fn test_missing_origins_get_zero_records() {
        let weights = DestinationWeights::uniform(5);
        let aggregator = AccessibilityAggregator::new(ChunkFileCodec::V1, &weights, 4);
        let table = aggregator.aggregate(&[], &[3, 1, 2]).unwrap();
        assert_eq!(table.len(), 3);
        for record in table.iter() {
            assert_eq!(record.total_dests, 0.0);
            assert_eq!(record.perc_dests, 0.0);
            assert!(record.dests_at_least.iter().all(|v| *v == 0.0));
            assert!(record.perc_at_least.iter().all(|v| *v == 0.0));
        }
        let ids: Vec<_> = table.iter().map(|r| r.origin_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_reaching_everything_always_is_full_weight() {
        let dir = tempfile::tempdir().unwrap();
        let weights =
            DestinationWeights::from_values(vec![(1, Some(4.0)), (2, Some(6.0)), (3, Some(10.0))]);
        let all = pairs(&[(7, 1), (7, 2), (7, 3)]);
        let files = [departure(8, 0), departure(8, 30)]
            .iter()
            .map(|t| write_chunk_file(dir.path(), IdRange::new(7, 7), IdRange::new(1, 3), *t, &all))
            .collect::<Vec<_>>();
        let aggregator = AccessibilityAggregator::new(ChunkFileCodec::V1, &weights, 2);
        let table = aggregator.aggregate(&files, &[7]).unwrap();
        let record = table.get(7).unwrap();
        assert_eq!(record.total_dests, 20.0);
        assert_eq!(record.perc_dests, 100.0);
        assert!(record.perc_at_least.iter().all(|v| *v == 100.0));
    }

    #[test]
    fn test_deciles_non_increasing_and_order_independent() {
        let dir = tempfile::tempdir().unwrap();
        let origins_a = IdRange::new(1, 2);
        let origins_b = IdRange::new(3, 3);
        let destinations = IdRange::new(1, 4);
        let mut files: Vec<PathBuf> = vec![];
        for (i, t) in [departure(8, 0), departure(8, 10), departure(8, 20), departure(8, 30)]
            .iter()
            .enumerate()
        {
            let reached_a = (1..=4)
                .filter(|d| (*d as usize) <= i + 1)
                .flat_map(|d| vec![(1, d), (2, 5 - d)])
                .collect::<Vec<_>>();
            files.push(write_chunk_file(dir.path(), origins_a, destinations, *t, &pairs(&reached_a)));
            let reached_b = if i % 2 == 0 { vec![(3, 2)] } else { vec![(3, 2), (3, 3)] };
            files.push(write_chunk_file(dir.path(), origins_b, destinations, *t, &pairs(&reached_b)));
        }
        let weights = DestinationWeights::from_values(vec![
            (1, Some(1.5)),
            (2, Some(2.0)),
            (3, Some(3.25)),
            (4, Some(0.5)),
        ]);
        let aggregator = AccessibilityAggregator::new(ChunkFileCodec::V1, &weights, 4);
        let forward = aggregator.aggregate(&files, &[1, 2, 3, 4]).unwrap();
        files.reverse();
        let backward = aggregator.aggregate(&files, &[4, 3, 2, 1]).unwrap();
        assert_eq!(forward, backward);
        assert!(!forward.is_integral());

        for record in forward.iter() {
            assert!(record
                .dests_at_least
                .windows(2)
                .all(|w| w[0] >= w[1]));
            assert!(record.dests_at_least[0] <= record.total_dests);
        }
        assert_eq!(forward.get(4).unwrap().total_dests, 0.0);
        assert_eq!(forward.get(3).unwrap().total_dests, 5.25);
    }
}
