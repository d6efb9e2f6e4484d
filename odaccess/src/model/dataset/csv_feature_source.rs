use odaccess_core::model::{
    engine::{FeatureFilter, FeatureSource, FeatureSourceError},
    ObjectId,
};
use std::path::{Path, PathBuf};

pub const DEFAULT_ID_FIELD: &str = "ObjectID";

/// a feature table held in memory from a CSV file with a header row. rows are
/// keyed by an integer object id column and kept in ascending id order.
#[derive(Debug, Clone)]
pub struct CsvFeatureSource {
    filepath: PathBuf,
    headers: csv::StringRecord,
    rows: Vec<(ObjectId, csv::StringRecord)>,
}

impl CsvFeatureSource {
    pub fn from_path(filepath: &Path, id_field: &str) -> Result<CsvFeatureSource, FeatureSourceError> {
        let read_error = |msg: String| FeatureSourceError::ReadError {
            filepath: filepath.to_string_lossy().to_string(),
            msg,
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(filepath)
            .map_err(|e| read_error(e.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|e| read_error(e.to_string()))?
            .clone();
        let id_index = headers.iter().position(|h| h == id_field).ok_or_else(|| {
            FeatureSourceError::MissingField {
                source_name: filepath.to_string_lossy().to_string(),
                field: id_field.to_string(),
            }
        })?;

        let mut rows = vec![];
        for (idx, row) in reader.records().enumerate() {
            let record = row.map_err(|e| read_error(e.to_string()))?;
            let id = record
                .get(id_index)
                .and_then(|v| v.parse::<ObjectId>().ok())
                .ok_or_else(|| {
                    read_error(format!(
                        "row {idx} has no integer value in id field '{id_field}'"
                    ))
                })?;
            rows.push((id, record));
        }
        rows.sort_by_key(|(id, _)| *id);
        if let Some(w) = rows.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(FeatureSourceError::UnorderedId {
                source_name: filepath.to_string_lossy().to_string(),
                id: w[0].0,
            });
        }
        log::debug!("read {} rows from {}", rows.len(), filepath.display());

        Ok(CsvFeatureSource {
            filepath: filepath.to_path_buf(),
            headers,
            rows,
        })
    }

    fn field_index(&self, field: &str) -> Result<usize, FeatureSourceError> {
        self.headers
            .iter()
            .position(|h| h == field)
            .ok_or_else(|| FeatureSourceError::MissingField {
                source_name: self.name(),
                field: field.to_string(),
            })
    }

    fn parse_value(
        &self,
        field: &str,
        id: ObjectId,
        raw: Option<&str>,
    ) -> Result<Option<f64>, FeatureSourceError> {
        match raw {
            None | Some("") => Ok(None),
            Some(v) => v
                .parse::<f64>()
                .map(Some)
                .map_err(|_| FeatureSourceError::NonNumericValue {
                    source_name: self.name(),
                    field: field.to_string(),
                    id,
                    value: v.to_string(),
                }),
        }
    }

    /// rows accepted by `filter`, paired with the value of the filter field
    fn filtered(
        &self,
        filter: &FeatureFilter,
    ) -> Result<Vec<&(ObjectId, csv::StringRecord)>, FeatureSourceError> {
        let filter_index = match &filter.non_zero_field {
            Some(f) => Some((f.as_str(), self.field_index(f)?)),
            None => None,
        };
        let mut accepted = vec![];
        for row in self.rows.iter() {
            let (id, record) = row;
            let value = match filter_index {
                Some((field, idx)) => self.parse_value(field, *id, record.get(idx))?,
                None => None,
            };
            if filter.accepts(*id, value) {
                accepted.push(row);
            }
        }
        Ok(accepted)
    }
}

impl FeatureSource for CsvFeatureSource {
    fn name(&self) -> String {
        self.filepath.to_string_lossy().to_string()
    }

    fn count(&self) -> usize {
        self.rows.len()
    }

    fn has_field(&self, field: &str) -> bool {
        self.headers.iter().any(|h| h == field)
    }

    fn object_ids(&self, filter: &FeatureFilter) -> Result<Vec<ObjectId>, FeatureSourceError> {
        Ok(self.filtered(filter)?.into_iter().map(|(id, _)| *id).collect())
    }

    fn field_values(
        &self,
        field: &str,
        filter: &FeatureFilter,
    ) -> Result<Vec<(ObjectId, Option<f64>)>, FeatureSourceError> {
        let idx = self.field_index(field)?;
        self.filtered(filter)?
            .into_iter()
            .map(|(id, record)| Ok((*id, self.parse_value(field, *id, record.get(idx))?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CsvFeatureSource;
    use odaccess_core::model::{
        engine::{FeatureFilter, FeatureSource, FeatureSourceError},
        partition::IdRange,
    };
    use std::io::Write;

    fn write_csv(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_filters() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "dests.csv",
            "ObjectID,name,jobs\n4,d,0\n1,a,10\n2,b,\n3,c,2.5\n",
        );
        let source = CsvFeatureSource::from_path(&path, "ObjectID").unwrap();
        assert_eq!(source.count(), 4);
        assert!(source.has_field("jobs"));
        assert_eq!(source.object_ids(&FeatureFilter::all()).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(
            source
                .object_ids(&FeatureFilter::all().with_non_zero(Some("jobs")))
                .unwrap(),
            vec![1, 3]
        );
        assert_eq!(
            source
                .object_ids(&FeatureFilter::all().within(IdRange::new(2, 3)))
                .unwrap(),
            vec![2, 3]
        );
        assert_eq!(
            source.field_values("jobs", &FeatureFilter::all()).unwrap(),
            vec![(1, Some(10.0)), (2, None), (3, Some(2.5)), (4, Some(0.0))]
        );
    }

    #[test]
    fn test_bad_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "o.csv", "ObjectID,jobs\n1,many\n");
        let source = CsvFeatureSource::from_path(&path, "ObjectID").unwrap();
        assert!(matches!(
            source.field_values("jobs", &FeatureFilter::all()),
            Err(FeatureSourceError::NonNumericValue { .. })
        ));
        assert!(matches!(
            source.field_values("missing", &FeatureFilter::all()),
            Err(FeatureSourceError::MissingField { .. })
        ));
        assert!(CsvFeatureSource::from_path(&path, "OID").is_err());

        let dup = write_csv(dir.path(), "dup.csv", "ObjectID\n1\n1\n");
        assert!(matches!(
            CsvFeatureSource::from_path(&dup, "ObjectID"),
            Err(FeatureSourceError::UnorderedId { id: 1, .. })
        ));
    }
}
