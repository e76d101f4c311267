//! Data Transfer Objects for the HTTP API.
//!
//! Chart and control DTOs are re-exported from the routes module; the types
//! defined here only exist at the HTTP boundary.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    ControlEvent, ControlState, ControlsData, PieChartData, ScatterChartData, SiteSelection,
};

/// A chart description together with its plotly.js figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse<T> {
    pub chart: T,
    pub figure: serde_json::Value,
}

/// Query parameters for the pie chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Launch site or `ALL` (default: ALL)
    #[serde(default)]
    pub site: Option<SiteSelection>,
}

/// Query parameters for the scatter chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Launch site or `ALL` (default: ALL)
    #[serde(default)]
    pub site: Option<SiteSelection>,
    /// Lower payload bound in kg (default: dataset minimum)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (default: dataset maximum)
    #[serde(default)]
    pub high: Option<f64>,
}

/// Request body for a control change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardEventRequest {
    /// State before the event (default: initial controls)
    #[serde(default)]
    pub state: Option<ControlState>,
    pub event: ControlEvent,
}

/// Charts recomputed by a control change. Edges that did not fire are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardEventResponse {
    pub state: ControlState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pie: Option<ChartResponse<PieChartData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scatter: Option<ChartResponse<ScatterChartData>>,
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
    /// SHA-256 of the loaded launch file
    pub checksum: String,
}
