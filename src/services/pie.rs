//! Success pie-chart aggregation.

use serde::{Deserialize, Serialize};

use crate::models::{LaunchRecord, Selection, SiteFilter};

/// One pie slice: group label and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Pie chart dataset plus its human-readable title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// Aggregate the filtered view into the success pie.
///
/// With all sites selected, records group by launch site and each slice's
/// weight is the sum of outcome class values, i.e. the number of successes
/// at that site. Note this is a successful-launch share, not a per-site
/// success rate: it never divides by the number of attempts at the site, so
/// a busy site outweighs a reliable one.
///
/// With a specific site selected, records group by outcome class and each
/// slice's weight is the record count for that class.
///
/// Slices appear in first-appearance order of their group in the filtered
/// view; groups with no members are omitted. An empty view yields zero
/// slices but still carries a title.
pub fn success_pie(filtered: &[&LaunchRecord], selection: &Selection) -> PieChart {
    let min_kg = selection.payload.min_kg();
    let max_kg = selection.payload.max_kg();

    match &selection.site {
        SiteFilter::All => {
            let mut slices: Vec<PieSlice> = Vec::new();
            for record in filtered {
                match slices.iter_mut().find(|s| s.label == record.launch_site) {
                    Some(slice) => slice.value += u64::from(record.outcome.class()),
                    None => slices.push(PieSlice {
                        label: record.launch_site.clone(),
                        value: u64::from(record.outcome.class()),
                    }),
                }
            }
            PieChart {
                title: format!(
                    "Successful Launches By Site for Payload Mass {min_kg}kg - {max_kg}kg"
                ),
                slices,
            }
        }
        SiteFilter::Site(site) => {
            let mut slices: Vec<PieSlice> = Vec::new();
            for record in filtered {
                let label = record.outcome.class().to_string();
                match slices.iter_mut().find(|s| s.label == label) {
                    Some(slice) => slice.value += 1,
                    None => slices.push(PieSlice { label, value: 1 }),
                }
            }
            PieChart {
                title: format!(
                    "Successful Launches for Site {site} for Payload Mass {min_kg}kg - {max_kg}kg"
                ),
                slices,
            }
        }
    }
}
