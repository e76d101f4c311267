use serde::{Deserialize, Serialize};

use super::pie::PieChartData;
use super::scatter::ScatterChartData;
use crate::models::{ControlState, PayloadRange, SiteSelection};

// =========================================================
// Reactive binder event types + route
// =========================================================

/// A single user interaction with one control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", content = "value")]
pub enum ControlEvent {
    #[serde(rename = "site")]
    SiteChanged(SiteSelection),
    #[serde(rename = "payload_range")]
    PayloadRangeChanged(PayloadRange),
}

/// Charts recomputed by one dispatch. Edges that did not fire are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUpdate {
    pub state: ControlState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pie: Option<PieChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scatter: Option<ScatterChartData>,
}

/// Route path for control events
pub const DASHBOARD_EVENTS_PATH: &str = "/dashboard/events";
