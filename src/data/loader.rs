use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::SensorSeries;

/// Header of the only column the loader reads.
pub const VALUE_COLUMN: &str = "value";

/// Why an uploaded file could not be turned into a [`SensorSeries`].
#[derive(Debug, Error)]
pub enum InputError {
    /// The schema error: the header row has no `value` column.
    #[error("CSV must contain a column named '{column}'")]
    MissingColumn { column: String },

    /// A non-blank `value` cell that is not a finite number.
    /// `row` is 1-based and excludes the header.
    #[error("row {row}: '{text}' is not a number")]
    InvalidValue { row: usize, text: String },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Whether this is the missing-column schema error.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, InputError::MissingColumn { .. })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a sensor series from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<SensorSeries, InputError> {
    let file = File::open(path)?;
    read_series(file)
}

/// Parse an uploaded CSV blob.
pub fn parse_bytes(bytes: &[u8]) -> Result<SensorSeries, InputError> {
    read_series(bytes)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one reading per data row in
/// the `value` column. Other columns are ignored, rows may be ragged, and
/// blank `value` cells are skipped as missing readings.
pub fn read_series<R: Read>(input: R) -> Result<SensorSeries, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let value_idx = reader
        .headers()?
        .iter()
        .position(|h| h == VALUE_COLUMN)
        .ok_or_else(|| InputError::MissingColumn {
            column: VALUE_COLUMN.to_string(),
        })?;

    let mut values = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = record.get(value_idx).unwrap_or("");
        if cell.is_empty() {
            continue;
        }
        values.push(parse_reading(cell, row_no + 1)?);
    }

    Ok(SensorSeries::new(values))
}

fn parse_reading(cell: &str, row: usize) -> Result<f64, InputError> {
    cell.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidValue {
            row,
            text: cell.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_value_column() {
        let series = parse_bytes(b"value\n25.1\n25.2\n24.9\n").unwrap();
        assert_eq!(series.values(), &[25.1, 25.2, 24.9]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "timestamp,value,unit\n0,1.5,C\n1,2.5,C\n2,3.5,C\n";
        let series = parse_bytes(csv.as_bytes()).unwrap();
        assert_eq!(series.values(), &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn missing_value_column_is_schema_error() {
        let err = parse_bytes(b"reading\n1.0\n2.0\n").unwrap_err();
        assert!(err.is_schema_error());
        assert_eq!(err.to_string(), "CSV must contain a column named 'value'");
    }

    #[test]
    fn header_match_is_exact_after_trimming() {
        assert!(parse_bytes(b" value ,x\n1,2\n3,4\n").is_ok());
        assert!(parse_bytes(b"Value\n1\n2\n").unwrap_err().is_schema_error());
    }

    #[test]
    fn blank_cells_are_skipped() {
        let series = parse_bytes(b"id,value\n1,10\n2,\n3,12\n4\n").unwrap();
        assert_eq!(series.values(), &[10.0, 12.0]);
    }

    #[test]
    fn non_numeric_cell_names_its_row() {
        match parse_bytes(b"value\n1.0\nabc\n").unwrap_err() {
            InputError::InvalidValue { row, text } => {
                assert_eq!(row, 2);
                assert_eq!(text, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_cells_are_rejected() {
        assert!(matches!(
            parse_bytes(b"value\n1.0\ninf\n"),
            Err(InputError::InvalidValue { row: 2, .. })
        ));
        assert!(matches!(
            parse_bytes(b"value\nNaN\n"),
            Err(InputError::InvalidValue { row: 1, .. })
        ));
    }

    #[test]
    fn header_only_file_yields_empty_series() {
        let series = parse_bytes(b"value\n").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("upload.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "value").unwrap();
        writeln!(file, "30").unwrap();
        writeln!(file, "30").unwrap();
        drop(file);

        let series = load_file(&path).unwrap();
        assert_eq!(series.values(), &[30.0, 30.0]);
    }

    #[test]
    fn load_file_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
