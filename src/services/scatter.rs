//! Payload/outcome scatter-chart aggregation.

use serde::{Deserialize, Serialize};

use crate::models::{LaunchRecord, Outcome};

/// One scatter point, taken verbatim from a filtered record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

/// Field names the chart renderer binds to its axis and color channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterEncoding {
    pub x: String,
    pub y: String,
    pub color: String,
}

impl Default for ScatterEncoding {
    fn default() -> Self {
        Self {
            x: "payload_mass_kg".to_string(),
            y: "outcome".to_string(),
            color: "booster_version_category".to_string(),
        }
    }
}

/// Scatter chart dataset plus its channel encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub points: Vec<ScatterPoint>,
    pub encoding: ScatterEncoding,
}

/// One point per filtered record, in view order.
///
/// No grouping or deduplication: identical points from distinct records are
/// both emitted. The booster version category passes through unchanged as
/// the color channel. Site selection never branches here; it only shapes
/// what the filtered view already contains.
pub fn payload_scatter(filtered: &[&LaunchRecord]) -> ScatterChart {
    let points = filtered
        .iter()
        .map(|record| ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            booster_version_category: record.booster_version_category.clone(),
        })
        .collect();

    ScatterChart {
        points,
        encoding: ScatterEncoding::default(),
    }
}
