//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint. Chart handlers parse the
//! selection from query parameters and delegate to the dashboard service;
//! all computation is synchronous and in-memory.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{HealthResponse, SelectionQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ChartData, ChartId, DashboardLayout, DashboardUpdate};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and report the
/// loaded dataset size.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dashboard.dataset().len(),
    }))
}

/// GET /v1/layout
///
/// Widget configuration for the UI collaborator: dropdown options and
/// payload slider bounds/defaults.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<DashboardLayout> {
    Ok(Json(state.dashboard.layout()))
}

/// GET /v1/dashboard
///
/// Recompute both charts from one selection snapshot.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> HandlerResult<DashboardUpdate> {
    let selection = query.into_selection()?;
    Ok(Json(state.dashboard.apply(&selection)))
}

/// GET /v1/charts/success-pie
///
/// Pie chart channel: successful-launch share per site (ALL) or
/// success/failure split (specific site).
pub async fn get_success_pie(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> HandlerResult<ChartData> {
    let selection = query.into_selection()?;
    Ok(Json(state.dashboard.chart(ChartId::SuccessPie, &selection)))
}

/// GET /v1/charts/payload-scatter
///
/// Scatter chart channel: payload mass vs. outcome, colored by booster
/// version category.
pub async fn get_payload_scatter(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> HandlerResult<ChartData> {
    let selection = query.into_selection()?;
    Ok(Json(
        state.dashboard.chart(ChartId::PayloadScatter, &selection),
    ))
}
