//! CSV loading for the launch dataset.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use super::checksum::calculate_checksum;
use super::dataset::LaunchDataset;
use super::error::{DatasetError, DatasetResult, ErrorContext};
use crate::models::{LaunchRecord, OutcomeClass};

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_VERSION_CATEGORY_COLUMN: &str = "Booster Version Category";

/// Columns every launch file must provide. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    LAUNCH_SITE_COLUMN,
    PAYLOAD_MASS_COLUMN,
    CLASS_COLUMN,
    BOOSTER_VERSION_CATEGORY_COLUMN,
];

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl RawLaunchRow {
    fn into_record(self, row: usize) -> DatasetResult<LaunchRecord> {
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DatasetError::invalid_record(
                row,
                format!("payload mass must be a non-negative number, got {}", self.payload_mass_kg),
            ));
        }

        // Some exports write the class as a float (`1.0`).
        let class = if self.class == 0.0 {
            OutcomeClass::Failure
        } else if self.class == 1.0 {
            OutcomeClass::Success
        } else {
            return Err(DatasetError::invalid_record(
                row,
                format!("class must be 0 or 1, got {}", self.class),
            ));
        };

        Ok(LaunchRecord::new(
            self.launch_site,
            self.payload_mass_kg,
            class,
            self.booster_version_category,
        ))
    }
}

/// Parse launch records from CSV text with a header row.
pub fn parse_launch_csv<R: Read>(source: R) -> DatasetResult<Vec<LaunchRecord>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::missing_column(column));
        }
    }

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        let row = index + 1;
        let raw = result.map_err(|e| DatasetError::invalid_record(row, e.to_string()))?;
        records.push(raw.into_record(row)?);
    }

    Ok(records)
}

/// Read, fingerprint and parse the launch file at `path`.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> DatasetResult<LaunchDataset> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        DatasetError::io(
            format!("Failed to read launch data: {}", e),
            ErrorContext::new("load_dataset").with_path(path),
        )
    })?;

    let checksum = calculate_checksum(&bytes);
    let dataset = parse_launch_csv(bytes.as_slice())
        .and_then(|records| LaunchDataset::new(records, checksum))
        .map_err(|e| e.with_operation("load_dataset").with_path(path))?;

    info!(
        path = %path.display(),
        records = dataset.len(),
        sites = dataset.launch_sites().len(),
        checksum = %dataset.checksum(),
        "Loaded launch dataset"
    );

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,1,9600.0,F9 B4 B1041.1,B4
";

    #[test]
    fn test_parse_ignores_extra_columns() {
        let records = parse_launch_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].launch_site, "CCAFS LC-40");
        assert_eq!(records[1].payload_mass.value(), 525.0);
        assert_eq!(records[2].class, OutcomeClass::Success);
        assert_eq!(records[2].booster_version_category, "B4");
    }

    #[test]
    fn test_parse_accepts_float_class() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,100,1.0,FT\n";
        let records = parse_launch_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].class, OutcomeClass::Success);
    }

    #[test]
    fn test_missing_column() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category\nA,100,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::MissingColumn { column, .. } => assert_eq!(column, "class"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_class_reports_row() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,100,1,FT\nA,200,2,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::InvalidRecord { row, message, .. } => {
                assert_eq!(row, 2);
                assert!(message.contains("class must be 0 or 1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_payload_is_invalid() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,heavy,1,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRecord { row: 1, .. }));
    }

    #[test]
    fn test_negative_payload_is_invalid() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,-5,1,FT\n";
        assert!(parse_launch_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_header_only_parses_to_nothing() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        assert!(parse_launch_csv(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        let ctx = err.context().unwrap();
        assert_eq!(ctx.operation.as_deref(), Some("load_dataset"));
        assert_eq!(ctx.path.as_deref(), Some("/definitely/not/here.csv"));
    }
}
