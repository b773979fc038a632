//! Dataset loading from the launch-records CSV.

mod csv_loader;

pub use csv_loader::{load_dataset, read_dataset};

use thiserror::Error;

/// Errors loading or constructing the launch dataset.
///
/// All of these are startup errors: the dataset is loaded once and the
/// process does not start without a valid one.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset contains no launch records")]
    Empty,
    #[error("record {row}: invalid payload mass {value} (must be finite and non-negative)")]
    InvalidPayload { row: usize, value: f64 },
    #[error("record {row}: invalid outcome class {value} (expected 0 or 1)")]
    InvalidClass { row: usize, value: u8 },
}
