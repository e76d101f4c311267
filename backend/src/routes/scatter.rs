use serde::{Deserialize, Serialize};

use crate::models::{OutcomeClass, PayloadMass, SiteSelection};

// =========================================================
// Scatter chart types + route
// =========================================================

/// One launch plotted as payload vs. outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass: PayloadMass,
    pub class: OutcomeClass,
    pub launch_site: String,
}

/// Points sharing one booster version category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub category: String,
    pub color: String,
    pub points: Vec<ScatterPoint>,
}

/// Summary statistics over payload masses. All zeros for an empty selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

/// Payload vs. outcome chart for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartData {
    pub title: String,
    pub site: SiteSelection,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    /// Series in order of first appearance of their category.
    pub series: Vec<ScatterSeries>,
    pub total_points: usize,
    pub payload_stats: PayloadStats,
}

/// Route path for scatter chart data
pub const SCATTER_CHART_PATH: &str = "/charts/scatter";
