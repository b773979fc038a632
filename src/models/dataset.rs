//! The immutable in-memory dataset of launch records.

use crate::models::record::LaunchRecord;
use crate::parsing::DatasetError;

/// Ordered, immutable collection of launch records, fixed for the process
/// lifetime after load.
///
/// Derived metadata (distinct site list, observed payload extent) is computed
/// once at construction so later reads never scan the table for it.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_min_kg: f64,
    payload_max_kg: f64,
}

impl LaunchDataset {
    /// Build a dataset from already-parsed records, enforcing the load-time
    /// invariants: the dataset is non-empty and every payload mass is finite
    /// and non-negative.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (idx, record) in records.iter().enumerate() {
            let mass = record.payload_mass_kg;
            if !mass.is_finite() || mass < 0.0 {
                return Err(DatasetError::InvalidPayload {
                    row: idx + 1,
                    value: mass,
                });
            }
        }

        // Distinct sites in first-appearance order.
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        let payload_min_kg = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max_kg = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            records,
            sites,
            payload_min_kg,
            payload_max_kg,
        })
    }

    /// All records, in load order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites, in first-appearance order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed payload mass extent `(min, max)` in kilograms.
    pub fn payload_extent(&self) -> (f64, f64) {
        (self.payload_min_kg, self.payload_max_kg)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
