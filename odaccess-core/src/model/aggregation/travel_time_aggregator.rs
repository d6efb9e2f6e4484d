use super::{
    result_file_ops, travel_time_record::TravelTimeAccumulator, AggregationError,
    TravelTimeRecord,
};
use crate::model::{chunk::ChunkFileCodec, partition::IdRange, ObjectId};
use std::{collections::BTreeMap, io::Write, path::PathBuf};

/// computes count, min, max and mean travel time per origin-destination pair.
///
/// output is produced one origin range at a time: the result files of a range
/// are read, summarized and written out before the next range is read, so
/// peak memory is bounded by the largest origin range.
pub struct TravelTimeAggregator {
    codec: ChunkFileCodec,
}

impl TravelTimeAggregator {
    pub fn new(codec: ChunkFileCodec) -> TravelTimeAggregator {
        TravelTimeAggregator { codec }
    }

    /// writes the statistics rows to `writer` in origin range order, rows
    /// within a range sorted by (origin, destination). returns the number of
    /// rows written. the header row is written even when no pair was reached.
    pub fn aggregate<W: Write>(
        &self,
        result_files: &[PathBuf],
        origin_ranges: &[IdRange],
        writer: &mut csv::Writer<W>,
    ) -> Result<usize, AggregationError> {
        let mut rows_written = 0;
        for range in origin_ranges {
            let mut files = result_files
                .iter()
                .filter(|f| self.codec.belongs_to_origin_range(f, range))
                .collect::<Vec<_>>();
            if files.is_empty() {
                continue;
            }
            files.sort();

            let mut stats: BTreeMap<(ObjectId, ObjectId), TravelTimeAccumulator> = BTreeMap::new();
            for file in files.iter() {
                result_file_ops::for_each_od_line(file, |line| {
                    let time = line.total_time.ok_or_else(|| {
                        AggregationError::MissingTravelTime {
                            filepath: file.to_string_lossy().to_string(),
                        }
                    })?;
                    stats
                        .entry((line.origin_id, line.destination_id))
                        .and_modify(|acc| acc.add(time))
                        .or_insert_with(|| TravelTimeAccumulator::new(time));
                    Ok(())
                })?;
            }

            for ((origin, destination), acc) in stats.iter() {
                writer
                    .serialize(acc.finish(*origin, *destination))
                    .map_err(|e| AggregationError::WriteError(e.to_string()))?;
            }
            writer
                .flush()
                .map_err(|e| AggregationError::WriteError(e.to_string()))?;
            log::debug!(
                "origins {}: {} result files, {} travel time rows",
                range,
                files.len(),
                stats.len()
            );
            rows_written += stats.len();
        }
        // csv only emits headers alongside the first serialized row
        if rows_written == 0 {
            writer
                .write_record(TravelTimeRecord::HEADER)
                .map_err(|e| AggregationError::WriteError(e.to_string()))?;
            writer
                .flush()
                .map_err(|e| AggregationError::WriteError(e.to_string()))?;
        }
        Ok(rows_written)
    }
}

#[cfg(test)]
mod tests {
    use super::TravelTimeAggregator;
    use crate::model::{
        aggregation::{result_file_ops::test_files::*, TravelTimeRecord},
        chunk::ChunkFileCodec,
        engine::OdLine,
        partition::IdRange,
    };

    fn run(files: &[std::path::PathBuf], ranges: &[IdRange]) -> (usize, Vec<TravelTimeRecord>) {
        let mut writer = csv::Writer::from_writer(vec![]);
        let n = TravelTimeAggregator::new(ChunkFileCodec::V1)
            .aggregate(files, ranges, &mut writer)
            .unwrap();
        let bytes = writer.into_inner().unwrap();
        let records = csv::Reader::from_reader(bytes.as_slice())
            .deserialize::<TravelTimeRecord>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        (n, records)
    }

    #[test]
    fn test_count_min_max_mean() {
        let dir = tempfile::tempdir().unwrap();
        let origins = IdRange::new(1, 1);
        let destinations = IdRange::new(1, 1);
        let files = vec![
            write_chunk_file(
                dir.path(),
                origins,
                destinations,
                departure(8, 0),
                &[OdLine::new(1, 1, Some(10.0))],
            ),
            write_chunk_file(
                dir.path(),
                origins,
                destinations,
                departure(8, 30),
                &[OdLine::new(1, 1, Some(20.0))],
            ),
        ];
        let (n, records) = run(&files, &[origins]);
        assert_eq!(n, 1);
        assert_eq!(
            records,
            vec![TravelTimeRecord {
                origin_id: 1,
                destination_id: 1,
                count: 2,
                min: 10.0,
                max: 20.0,
                mean: 15.0
            }]
        );
    }

    #[test]
    fn test_grouped_output_order_and_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let first = IdRange::new(1, 2);
        let second = IdRange::new(3, 4);
        let destinations = IdRange::new(1, 9);
        let files = vec![
            write_chunk_file(
                dir.path(),
                second,
                destinations,
                departure(8, 0),
                &[OdLine::new(4, 1, Some(3.0)), OdLine::new(3, 2, Some(1.0))],
            ),
            write_chunk_file(
                dir.path(),
                first,
                destinations,
                departure(8, 0),
                &[OdLine::new(2, 9, Some(7.0)), OdLine::new(1, 5, Some(2.0))],
            ),
        ];
        let (n, records) = run(&files, &[first, IdRange::new(10, 20), second]);
        assert_eq!(n, 4);
        let keys: Vec<_> = records
            .iter()
            .map(|r| (r.origin_id, r.destination_id))
            .collect();
        assert_eq!(keys, vec![(1, 5), (2, 9), (3, 2), (4, 1)]);
    }

    #[test]
    fn test_empty_result_files_still_write_header() {
        let dir = tempfile::tempdir().unwrap();
        let range = IdRange::new(1, 5);
        let file = write_chunk_file(dir.path(), range, range, departure(8, 0), &[]);
        std::fs::write(&file, "OriginOID,DestinationOID,Total_Time\n").unwrap();
        let files = vec![file];
        let mut writer = csv::Writer::from_writer(vec![]);
        let n = TravelTimeAggregator::new(ChunkFileCodec::V1)
            .aggregate(&files, &[range], &mut writer)
            .unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(n, 0);
        assert_eq!(text, "OriginOID,DestinationOID,count,min,max,mean\n");
    }

    #[test]
    fn test_header_matches_serialized_columns() {
        let dir = tempfile::tempdir().unwrap();
        let range = IdRange::new(1, 1);
        let files = vec![write_chunk_file(
            dir.path(),
            range,
            range,
            departure(8, 0),
            &[OdLine::new(1, 1, Some(4.0))],
        )];
        let mut writer = csv::Writer::from_writer(vec![]);
        TravelTimeAggregator::new(ChunkFileCodec::V1)
            .aggregate(&files, &[range], &mut writer)
            .unwrap();
        let bytes = writer.into_inner().unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), TravelTimeRecord::HEADER);
    }

    #[test]
    fn test_rows_without_travel_time_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let range = IdRange::new(1, 1);
        let files = vec![write_chunk_file(
            dir.path(),
            range,
            range,
            departure(8, 0),
            &[OdLine::new(1, 1, None)],
        )];
        let mut writer = csv::Writer::from_writer(vec![]);
        let result = TravelTimeAggregator::new(ChunkFileCodec::V1).aggregate(&files, &[range], &mut writer);
        assert!(result.is_err());
    }
}
