//! Service layer: the pure data transformations behind the dashboard.
//!
//! Everything here is a deterministic function of the immutable dataset and
//! one selection snapshot. No service caches results or holds mutable state;
//! the dashboard recomputes from scratch on every selection change.

pub mod dashboard;
pub mod filter;
pub mod pie;
pub mod scatter;

pub use dashboard::{ChartData, ChartId, Dashboard, DashboardLayout, DashboardUpdate};
pub use filter::filter_records;
pub use pie::success_pie;
pub use scatter::payload_scatter;
