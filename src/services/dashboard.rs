//! Dashboard orchestration: one selection snapshot in, chart data out.
//!
//! This is the explicit replacement for callback wiring keyed on widget id
//! strings: chart channels are a typed enum, selections arrive as typed
//! values, and chart data is returned to the caller instead of being written
//! into shared figure state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{
    LaunchDataset, Selection, ALL_SITES, SLIDER_MAX_KG, SLIDER_MIN_KG, SLIDER_STEP_KG,
};
use crate::services::filter::filter_records;
use crate::services::pie::{success_pie, PieChart};
use crate::services::scatter::{payload_scatter, ScatterChart};

/// The dashboard's two chart channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    SuccessPie,
    PayloadScatter,
}

/// Chart data for a single channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChartData {
    SuccessPie(PieChart),
    PayloadScatter(ScatterChart),
}

/// Both charts derived from one selection snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUpdate {
    pub pie: PieChart,
    pub scatter: ScatterChart,
}

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Range-slider configuration for the payload widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min_kg: f64,
    pub max_kg: f64,
    pub step_kg: f64,
    /// Default thumb positions: the dataset's observed payload extent.
    pub default_range: [f64; 2],
}

/// Widget configuration handed to the UI collaborator at page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub site_options: Vec<DropdownOption>,
    pub payload_slider: SliderConfig,
}

/// Reactive binding between selection changes and chart recomputation.
///
/// Holds the dataset behind an [`Arc`] so HTTP handlers can share it
/// read-only. Every call recomputes the filtered view and the requested
/// charts in full; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<LaunchDataset>,
}

impl Dashboard {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    /// Full recompute for one selection change: filter once, then both
    /// aggregations over the same view.
    pub fn apply(&self, selection: &Selection) -> DashboardUpdate {
        let filtered = filter_records(&self.dataset, selection);
        DashboardUpdate {
            pie: success_pie(&filtered, selection),
            scatter: payload_scatter(&filtered),
        }
    }

    /// Recompute a single chart channel.
    pub fn chart(&self, id: ChartId, selection: &Selection) -> ChartData {
        let filtered = filter_records(&self.dataset, selection);
        match id {
            ChartId::SuccessPie => ChartData::SuccessPie(success_pie(&filtered, selection)),
            ChartId::PayloadScatter => ChartData::PayloadScatter(payload_scatter(&filtered)),
        }
    }

    /// Widget configuration: ALL plus each known site, and the payload
    /// slider with configured bounds and observed defaults.
    pub fn layout(&self) -> DashboardLayout {
        let mut site_options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        site_options.extend(self.dataset.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let (observed_min, observed_max) = self.dataset.payload_extent();
        DashboardLayout {
            site_options,
            payload_slider: SliderConfig {
                min_kg: SLIDER_MIN_KG,
                max_kg: SLIDER_MAX_KG,
                step_kg: SLIDER_STEP_KG,
                default_range: [observed_min, observed_max],
            },
        }
    }
}
