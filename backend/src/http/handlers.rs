//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for filtering and chart construction.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

use super::dto::{
    ChartResponse, ControlsData, DashboardEventRequest, DashboardEventResponse, HealthResponse,
    PieChartData, PieQuery, ScatterChartData, ScatterQuery,
};
use super::error::AppError;
use super::page;
use super::state::AppState;
use crate::api::{ControlState, DashboardUpdate, PayloadRange};
use crate::services::{self, Dashboard};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn pie_response(chart: PieChartData) -> ChartResponse<PieChartData> {
    let figure = services::pie_figure(&chart);
    ChartResponse { chart, figure }
}

fn scatter_response(chart: ScatterChartData) -> ChartResponse<ScatterChartData> {
    let figure = services::scatter_figure(&chart);
    ChartResponse { chart, figure }
}

fn finite_bound(name: &str, value: Option<f64>) -> Result<Option<f64>, AppError> {
    match value {
        Some(v) if !v.is_finite() => Err(AppError::BadRequest(format!(
            "'{}' must be a finite number of kilograms",
            name
        ))),
        other => Ok(other),
    }
}

// =============================================================================
// Page + Health Check
// =============================================================================

/// GET /
///
/// The dashboard page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render_index(&state.controls.page_title))
}

/// GET /health
///
/// Health check endpoint reporting the loaded dataset.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
        checksum: state.dataset.checksum().to_string(),
    }))
}

// =============================================================================
// Controls
// =============================================================================

/// GET /v1/controls
///
/// Site dropdown options and payload slider bounds.
pub async fn get_controls(State(state): State<AppState>) -> HandlerResult<ControlsData> {
    Ok(Json(services::describe_controls(
        &state.dataset,
        &state.controls,
    )))
}

// =============================================================================
// Chart Endpoints
// =============================================================================

/// GET /v1/charts/pie?site=
///
/// Success/failure distribution for one site or all sites.
pub async fn get_pie_chart(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> HandlerResult<ChartResponse<PieChartData>> {
    let mut controls = ControlState::initial(state.dataset.payload_bounds());
    if let Some(site) = query.site {
        controls.site = site;
    }

    let chart = services::pie_edge(&state.dataset, &controls);
    Ok(Json(pie_response(chart)))
}

/// GET /v1/charts/scatter?site=&low=&high=
///
/// Payload vs. outcome for the selected site and payload range.
pub async fn get_scatter_chart(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> HandlerResult<ChartResponse<ScatterChartData>> {
    let bounds = state.dataset.payload_bounds();
    let low = finite_bound("low", query.low)?.unwrap_or(bounds.min.value());
    let high = finite_bound("high", query.high)?.unwrap_or(bounds.max.value());

    let controls = ControlState {
        site: query.site.unwrap_or_default(),
        payload_range: PayloadRange::new(low, high),
    };

    let chart = services::scatter_edge(&state.dataset, &controls);
    Ok(Json(scatter_response(chart)))
}

// =============================================================================
// Reactive Binder
// =============================================================================

/// POST /v1/dashboard/events
///
/// Apply one control change to the supplied state and return the charts whose
/// edges fired.
pub async fn post_dashboard_event(
    State(state): State<AppState>,
    Json(request): Json<DashboardEventRequest>,
) -> HandlerResult<DashboardEventResponse> {
    let mut dashboard = match request.state {
        Some(current) => Dashboard::with_state(state.dataset.clone(), current),
        None => Dashboard::new(state.dataset.clone()),
    };

    let DashboardUpdate {
        state: next,
        pie,
        scatter,
    } = dashboard.dispatch(request.event);

    Ok(Json(DashboardEventResponse {
        state: next,
        pie: pie.map(pie_response),
        scatter: scatter.map(scatter_response),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("No such endpoint".to_string())
}
