use super::AggregationError;
use crate::model::{
    chunk::ChunkFileCodec,
    engine::OdLine,
    partition::IdRange,
};
use std::{collections::BTreeMap, path::{Path, PathBuf}};

/// streams the rows of a chunk result file into `f`.
pub fn for_each_od_line<F>(path: &Path, mut f: F) -> Result<(), AggregationError>
where
    F: FnMut(OdLine) -> Result<(), AggregationError>,
{
    let read_error = |msg: String| AggregationError::ReadError {
        filepath: path.to_string_lossy().to_string(),
        msg,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| read_error(e.to_string()))?;
    for row in reader.deserialize::<OdLine>() {
        let line = row.map_err(|e| read_error(e.to_string()))?;
        f(line)?;
    }
    Ok(())
}

/// groups result files by the origin range encoded in their filenames.
pub fn group_by_origin_range(
    codec: &ChunkFileCodec,
    result_files: &[PathBuf],
) -> Result<BTreeMap<IdRange, Vec<PathBuf>>, AggregationError> {
    let mut groups: BTreeMap<IdRange, Vec<PathBuf>> = BTreeMap::new();
    for file in result_files {
        let chunk = codec.decode(&file.to_string_lossy())?;
        groups.entry(chunk.origin_range).or_default().push(file.clone());
    }
    for files in groups.values_mut() {
        files.sort();
    }
    Ok(groups)
}


#[cfg(test)]
mod tests {
    use super::{for_each_od_line, group_by_origin_range, test_files::*};
    use crate::model::{chunk::ChunkFileCodec, engine::OdLine, partition::IdRange};

    #[test]
    fn test_group_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_chunk_file(
            dir.path(),
            IdRange::new(1, 2),
            IdRange::new(1, 5),
            departure(8, 0),
            &[OdLine::new(1, 3, None), OdLine::new(2, 4, None)],
        );
        let b = write_chunk_file(
            dir.path(),
            IdRange::new(3, 4),
            IdRange::new(1, 5),
            departure(8, 0),
            &[OdLine::new(3, 3, Some(4.5))],
        );
        let groups =
            group_by_origin_range(&ChunkFileCodec::V1, &[b.clone(), a.clone()]).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&IdRange::new(1, 2)], vec![a.clone()]);

        let mut lines = vec![];
        for_each_od_line(&b, |l| {
            lines.push(l);
            Ok(())
        })
        .unwrap();
        assert_eq!(lines, vec![OdLine::new(3, 3, Some(4.5))]);
    }
}
