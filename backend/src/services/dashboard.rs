//! Reactive binder.
//!
//! Owns the control state and maps each [`ControlEvent`] to the chart edges it
//! drives:
//!
//! - Edge A: site changes recompute the pie chart.
//! - Edge B: site or payload range changes recompute the scatter chart.
//!
//! Every firing recomputes from the immutable dataset.

use std::sync::Arc;

use tracing::debug;

use crate::api::{ControlEvent, DashboardUpdate, PieChartData, ScatterChartData};
use crate::db::LaunchDataset;
use crate::models::ControlState;

use super::charts::{build_pie_chart, build_scatter_chart};
use super::filtering::{compute_pie_data, compute_scatter_data};

/// Edge A: pie chart for the current state. Ignores the payload range.
pub fn pie_edge(dataset: &LaunchDataset, state: &ControlState) -> PieChartData {
    let counts = compute_pie_data(dataset.records(), &state.site);
    build_pie_chart(&counts, &state.site)
}

/// Edge B: scatter chart for the current state.
pub fn scatter_edge(dataset: &LaunchDataset, state: &ControlState) -> ScatterChartData {
    let rows = compute_scatter_data(dataset.records(), &state.site, &state.payload_range);
    build_scatter_chart(&rows, &state.site)
}

/// Control state bound to a dataset.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<LaunchDataset>,
    state: ControlState,
}

impl Dashboard {
    /// Start from the default controls: all sites, full payload range.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let state = ControlState::initial(dataset.payload_bounds());
        Self { dataset, state }
    }

    /// Resume from a state held elsewhere (e.g. by a browser session).
    pub fn with_state(dataset: Arc<LaunchDataset>, state: ControlState) -> Self {
        Self { dataset, state }
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    /// Both charts for the current state, as drawn on first page load.
    pub fn render(&self) -> DashboardUpdate {
        DashboardUpdate {
            state: self.state.clone(),
            pie: Some(pie_edge(&self.dataset, &self.state)),
            scatter: Some(scatter_edge(&self.dataset, &self.state)),
        }
    }

    /// Apply one control change and fire the edges that depend on it.
    pub fn dispatch(&mut self, event: ControlEvent) -> DashboardUpdate {
        match event {
            ControlEvent::SiteChanged(site) => {
                debug!(site = %site, "Site selection changed");
                self.state.site = site;
                DashboardUpdate {
                    state: self.state.clone(),
                    pie: Some(pie_edge(&self.dataset, &self.state)),
                    scatter: Some(scatter_edge(&self.dataset, &self.state)),
                }
            }
            ControlEvent::PayloadRangeChanged(range) => {
                debug!(
                    low = range.low.value(),
                    high = range.high.value(),
                    "Payload range changed"
                );
                self.state.payload_range = range;
                DashboardUpdate {
                    state: self.state.clone(),
                    pie: None,
                    scatter: Some(scatter_edge(&self.dataset, &self.state)),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod dashboard_tests;
