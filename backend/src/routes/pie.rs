use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{OutcomeClass, SiteSelection};

// =========================================================
// Pie chart types + route
// =========================================================

/// Launch count per outcome class. Classes with no launches are absent.
pub type OutcomeCounts = BTreeMap<OutcomeClass, usize>;

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub class: OutcomeClass,
    pub count: usize,
}

/// Success/failure distribution for the selected site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartData {
    pub title: String,
    pub site: SiteSelection,
    /// Ordered by class value.
    pub slices: Vec<PieSlice>,
    pub total: usize,
}

impl PieChartData {
    pub fn count_for(&self, class: OutcomeClass) -> usize {
        self.slices
            .iter()
            .find(|s| s.class == class)
            .map(|s| s.count)
            .unwrap_or(0)
    }
}

/// Route path for pie chart data
pub const PIE_CHART_PATH: &str = "/charts/pie";
