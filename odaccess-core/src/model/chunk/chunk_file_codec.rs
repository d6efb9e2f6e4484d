use super::{Chunk, ChunkFileError};
use crate::model::{partition::IdRange, ObjectId};
use chrono::NaiveDateTime;
use std::path::Path;

pub const CHUNK_FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// naming scheme for chunk result files. aggregation groups files by the
/// origin range encoded in their name, so the scheme is part of the contract
/// between solvers and aggregators.
///
/// `V1` names look like `ODLines_O_1_1000_D_2001_3000_T_20220428_091500.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkFileCodec {
    #[default]
    V1,
}

impl ChunkFileCodec {
    const V1_PREFIX: &'static str = "ODLines";
    const V1_EXTENSION: &'static str = ".csv";

    pub fn encode(&self, chunk: &Chunk) -> String {
        match self {
            ChunkFileCodec::V1 => format!(
                "{}D_{}_{}_T_{}{}",
                self.origin_prefix(&chunk.origin_range),
                chunk.destination_range.low,
                chunk.destination_range.high,
                chunk.departure.format(CHUNK_FILE_TIME_FORMAT),
                Self::V1_EXTENSION
            ),
        }
    }

    /// filename prefix shared by every chunk file of an origin range.
    pub fn origin_prefix(&self, origin_range: &IdRange) -> String {
        match self {
            ChunkFileCodec::V1 => format!(
                "{}_O_{}_{}_",
                Self::V1_PREFIX,
                origin_range.low,
                origin_range.high
            ),
        }
    }

    /// true if the file at `path` was written for the given origin range.
    pub fn belongs_to_origin_range(&self, path: &Path, origin_range: &IdRange) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(&self.origin_prefix(origin_range)))
            .unwrap_or_default()
    }

    /// recovers the chunk coordinates from a result filename. accepts a bare
    /// filename or a path.
    pub fn decode(&self, filename: &str) -> Result<Chunk, ChunkFileError> {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(filename);
        let fail = |reason: &str| ChunkFileError::UnrecognizedFilename {
            filename: filename.to_string(),
            reason: reason.to_string(),
        };
        match self {
            ChunkFileCodec::V1 => {
                let stem = name
                    .strip_suffix(Self::V1_EXTENSION)
                    .ok_or_else(|| fail("missing .csv extension"))?;
                let parts = stem.split('_').collect::<Vec<_>>();
                match parts.as_slice() {
                    [prefix, "O", o_lo, o_hi, "D", d_lo, d_hi, "T", date, time]
                        if *prefix == Self::V1_PREFIX =>
                    {
                        let parse_id = |s: &str| {
                            s.parse::<ObjectId>()
                                .map_err(|e| fail(&format!("invalid identifier '{s}': {e}")))
                        };
                        let origin_range = IdRange::new(parse_id(o_lo)?, parse_id(o_hi)?);
                        let destination_range = IdRange::new(parse_id(d_lo)?, parse_id(d_hi)?);
                        let departure = NaiveDateTime::parse_from_str(
                            &format!("{date}_{time}"),
                            CHUNK_FILE_TIME_FORMAT,
                        )
                        .map_err(|e| fail(&format!("invalid departure time: {e}")))?;
                        Ok(Chunk::new(origin_range, destination_range, departure))
                    }
                    _ => Err(fail("unexpected name layout")),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChunkFileCodec;
    use crate::model::{chunk::Chunk, partition::IdRange};
    use chrono::NaiveDate;
    use std::path::Path;

    fn chunk() -> Chunk {
        Chunk::new(
            IdRange::new(1, 1000),
            IdRange::new(2001, 3000),
            NaiveDate::from_ymd_opt(2022, 4, 28)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_encode() {
        assert_eq!(
            ChunkFileCodec::V1.encode(&chunk()),
            "ODLines_O_1_1000_D_2001_3000_T_20220428_091500.csv"
        );
    }

    #[test]
    fn test_decode_from_path() {
        let decoded = ChunkFileCodec::V1
            .decode("/tmp/scratch/ODLines_O_1_1000_D_2001_3000_T_20220428_091500.csv")
            .unwrap();
        assert_eq!(decoded, chunk());
    }

    #[test]
    fn test_origin_prefix_does_not_match_longer_ids() {
        let codec = ChunkFileCodec::V1;
        let range = IdRange::new(1, 10);
        assert!(codec.belongs_to_origin_range(
            Path::new("ODLines_O_1_10_D_1_5_T_20220428_091500.csv"),
            &range
        ));
        assert!(!codec.belongs_to_origin_range(
            Path::new("ODLines_O_1_100_D_1_5_T_20220428_091500.csv"),
            &range
        ));
    }

    #[test]
    fn test_decode_rejects_other_files() {
        let codec = ChunkFileCodec::V1;
        assert!(codec.decode("chunk_job_abc.log").is_err());
        assert!(codec.decode("ODLines_O_1_x_D_1_5_T_20220428_091500.csv").is_err());
        assert!(codec.decode("ODLines_O_1_2_D_1_5_T_20221399_091500.csv").is_err());
    }
}
