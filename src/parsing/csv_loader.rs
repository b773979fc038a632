//! CSV parser for the launch-records table.
//!
//! The file is headered; only the four columns the dashboard uses are read
//! and any extra columns are ignored. Row numbers in errors are 1-based data
//! rows (the header is row 0).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::models::{LaunchDataset, LaunchRecord, Outcome};

use super::DatasetError;

/// Raw CSV row with the dataset's original column headers.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// Read a dataset from any CSV source.
pub fn read_dataset<R: Read>(reader: R) -> Result<LaunchDataset, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let outcome = Outcome::try_from(row.class).map_err(|_| DatasetError::InvalidClass {
            row: idx + 1,
            value: row.class,
        })?;
        records.push(LaunchRecord {
            launch_site: row.launch_site,
            payload_mass_kg: row.payload_mass_kg,
            outcome,
            booster_version_category: row.booster_version_category,
        });
    }

    LaunchDataset::from_records(records)
}

/// Load the dataset from a CSV file on disk.
pub fn load_dataset(path: &Path) -> Result<LaunchDataset, DatasetError> {
    let file = std::fs::File::open(path)?;
    read_dataset(std::io::BufReader::new(file))
}
