//! Filter engine: selection snapshot -> filtered record view.

use crate::models::{LaunchDataset, LaunchRecord, Selection};

/// Apply a selection to the dataset, returning the matching records in their
/// original order.
///
/// The payload-range predicate is inclusive on both ends and always applied;
/// the site-equality predicate applies only when a specific site is selected.
/// An empty result is valid output, not an error. Pure and deterministic:
/// the same inputs always yield the same view.
pub fn filter_records<'a>(
    dataset: &'a LaunchDataset,
    selection: &Selection,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| selection.payload.contains(record.payload_mass_kg))
        .filter(|record| selection.site.matches(&record.launch_site))
        .collect()
}
