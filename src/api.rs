//! Public API surface for the backend.
//!
//! This file consolidates the domain and DTO types the HTTP API exposes.
//! Chart and layout DTOs derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    LaunchDataset, LaunchRecord, Outcome, PayloadRange, Selection, SelectionError, SiteFilter,
    ALL_SITES, SLIDER_MAX_KG, SLIDER_MIN_KG, SLIDER_STEP_KG,
};

pub use crate::services::dashboard::{
    ChartData, ChartId, DashboardLayout, DashboardUpdate, DropdownOption, SliderConfig,
};
pub use crate::services::pie::{PieChart, PieSlice};
pub use crate::services::scatter::{ScatterChart, ScatterEncoding, ScatterPoint};

pub use crate::parsing::DatasetError;
