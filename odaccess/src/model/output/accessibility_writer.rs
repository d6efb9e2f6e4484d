use odaccess_core::model::{
    aggregation::{AccessibilityRecord, AccessibilityTable, AggregationError},
    ObjectId,
};
use std::path::Path;

/// writes a copy of the origins CSV with the accessibility statistic columns
/// appended. statistic columns already present in the origins are replaced.
/// `output` may be the origins file itself.
///
/// # Returns
///
/// the number of origin rows written
pub fn write_accessibility_table(
    origins: &Path,
    id_field: &str,
    table: &AccessibilityTable,
    output: &Path,
) -> Result<usize, AggregationError> {
    let read_error = |msg: String| AggregationError::ReadError {
        filepath: origins.to_string_lossy().to_string(),
        msg,
    };
    let write_error = |e: csv::Error| AggregationError::WriteError(e.to_string());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(origins)
        .map_err(|e| read_error(e.to_string()))?;
    let headers = reader
        .headers()
        .map_err(|e| read_error(e.to_string()))?
        .clone();
    let stat_fields = AccessibilityRecord::field_names();
    let kept = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !stat_fields.iter().any(|f| f == h.trim()))
        .map(|(i, _)| i)
        .collect::<Vec<_>>();
    let id_index = headers
        .iter()
        .position(|h| h.trim() == id_field.trim())
        .ok_or_else(|| read_error(format!("missing id field '{id_field}'")))?;

    // written beside the output and moved into place so the origins file can
    // be rewritten in place
    let staging = output.with_extension("odaccess.tmp");
    let mut writer = csv::Writer::from_path(&staging).map_err(write_error)?;
    let mut header_row = kept
        .iter()
        .filter_map(|i| headers.get(*i))
        .map(String::from)
        .collect::<Vec<_>>();
    header_row.extend(stat_fields);
    writer.write_record(&header_row).map_err(write_error)?;

    let mut rows = 0;
    for row in reader.records() {
        let record = row.map_err(|e| read_error(e.to_string()))?;
        let id = record
            .get(id_index)
            .and_then(|v| v.trim().parse::<ObjectId>().ok())
            .ok_or_else(|| read_error(format!("row {rows} has no integer id")))?;
        let stats = table
            .get(id)
            .cloned()
            .unwrap_or_else(|| AccessibilityRecord::empty(id));
        let mut out_row = kept
            .iter()
            .map(|i| record.get(*i).unwrap_or_default().to_string())
            .collect::<Vec<_>>();
        out_row.extend(stats.field_values(table.is_integral()));
        writer.write_record(&out_row).map_err(write_error)?;
        rows += 1;
    }
    writer
        .flush()
        .map_err(|e| AggregationError::WriteError(e.to_string()))?;
    drop(writer);
    drop(reader);
    std::fs::rename(&staging, output).map_err(|e| {
        AggregationError::WriteError(format!(
            "failed moving {} to {}: {e}",
            staging.display(),
            output.display()
        ))
    })?;
    log::info!(
        "Accessibility statistics fields were added to {} origins in {}.",
        rows,
        output.display()
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::write_accessibility_table;
    use odaccess_core::model::aggregation::{AccessibilityRecord, AccessibilityTable};
    use std::collections::BTreeMap;

    #[test]
    fn test_rewrite_in_place_replaces_old_statistics() {
        let dir = tempfile::tempdir().unwrap();
        let origins = dir.path().join("origins.csv");
        std::fs::write(&origins, "ObjectID,TotalDests,name\n1,99,a\n2,98,b\n").unwrap();

        let mut record = AccessibilityRecord::empty(1);
        record.total_dests = 2.0;
        record.perc_dests = 50.0;
        record.dests_at_least[0] = 2.0;
        record.perc_at_least[0] = 50.0;
        let table = AccessibilityTable::new(BTreeMap::from([(1, record)]), true);

        let n = write_accessibility_table(&origins, "ObjectID", &table, &origins).unwrap();
        assert_eq!(n, 2);

        let mut reader = csv::Reader::from_path(&origins).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 22);
        assert_eq!(&headers[0], "ObjectID");
        assert_eq!(&headers[1], "name");
        assert_eq!(&headers[2], "TotalDests");
        assert_eq!(&headers[21], "PsAL90Perc");
        let rows = reader.records().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(&rows[0][2], "2");
        assert_eq!(&rows[0][3], "50");
        assert_eq!(&rows[0][4], "2");
        assert_eq!(&rows[1][1], "b");
        assert!(rows[1].iter().skip(2).all(|v| v == "0"));
        assert!(!dir.path().join("origins.odaccess.tmp").exists());
    }

    #[test]
    fn test_padded_headers_match_id_and_statistic_fields() {
        let dir = tempfile::tempdir().unwrap();
        let origins = dir.path().join("origins.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&origins, " id , TotalDests ,name\n 7 ,5,a\n").unwrap();

        let mut record = AccessibilityRecord::empty(7);
        record.total_dests = 3.0;
        let table = AccessibilityTable::new(BTreeMap::from([(7, record)]), true);

        let n = write_accessibility_table(&origins, "id", &table, &output).unwrap();
        assert_eq!(n, 1);

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 22);
        assert_eq!(&headers[1], "name");
        assert_eq!(&headers[2], "TotalDests");
        let rows = reader.records().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(&rows[0][2], "3");
    }
}
