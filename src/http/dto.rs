//! Data Transfer Objects for the HTTP API.
//!
//! Chart and layout DTOs are re-exported from the service layer since they
//! already derive Serialize/Deserialize; this module adds the request-side
//! types.

use serde::{Deserialize, Serialize};

use crate::models::{
    PayloadRange, Selection, SiteFilter, ALL_SITES, SLIDER_MAX_KG, SLIDER_MIN_KG,
};

pub use crate::api::{
    // Dashboard
    ChartData, ChartId, DashboardLayout, DashboardUpdate, DropdownOption, SliderConfig,
    // Pie
    PieChart, PieSlice,
    // Scatter
    ScatterChart, ScatterEncoding, ScatterPoint,
};

use super::error::AppError;

/// Query parameters carrying one selection snapshot.
///
/// Every widget-change event maps to one request with the full selection;
/// omitted parameters fall back to the widget defaults (ALL sites, full
/// slider range).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionQuery {
    /// Site dropdown value (`ALL` or a site identifier)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg (inclusive)
    #[serde(default)]
    pub payload_min: Option<f64>,
    /// Upper payload bound in kg (inclusive)
    #[serde(default)]
    pub payload_max: Option<f64>,
}

impl SelectionQuery {
    /// Validate the raw widget values into a typed selection.
    ///
    /// Unknown site strings pass through (they select nothing downstream);
    /// inverted or non-finite payload bounds are rejected here, before a
    /// selection exists.
    pub fn into_selection(self) -> Result<Selection, AppError> {
        let site = SiteFilter::parse(self.site.as_deref().unwrap_or(ALL_SITES));
        let payload = PayloadRange::new(
            self.payload_min.unwrap_or(SLIDER_MIN_KG),
            self.payload_max.unwrap_or(SLIDER_MAX_KG),
        )?;
        Ok(Selection::new(site, payload))
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
}
