//! Chart builders.
//!
//! Turn filtered or aggregated launch data into chart descriptions. Same input,
//! same chart; no I/O.

use crate::api::{
    OutcomeCounts, PieChartData, PieSlice, ScatterChartData, ScatterPoint, ScatterSeries,
};
use crate::models::{LaunchRecord, SiteSelection};

use super::stats::payload_stats;

/// Default qualitative palette, assigned per category in order of appearance.
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const CLASS_AXIS_LABEL: &str = "class";
pub const BOOSTER_LEGEND_LABEL: &str = "Booster Version Category";

pub fn pie_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Total Success and Failure Launches for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Total Success and Failure Launches for Site {}", name),
    }
}

pub fn scatter_title(site: &SiteSelection) -> String {
    format!("Payload vs. Outcome for {}", site.display_name())
}

/// One slice per class present in `counts`, ordered by class value.
pub fn build_pie_chart(counts: &OutcomeCounts, site: &SiteSelection) -> PieChartData {
    let slices: Vec<PieSlice> = counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(class, count)| PieSlice {
            class: *class,
            count: *count,
        })
        .collect();
    let total = slices.iter().map(|s| s.count).sum();

    PieChartData {
        title: pie_title(site),
        site: site.clone(),
        slices,
        total,
    }
}

/// One point per row, grouped into a coloured series per booster category.
pub fn build_scatter_chart(rows: &[&LaunchRecord], site: &SiteSelection) -> ScatterChartData {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for row in rows {
        let point = ScatterPoint {
            payload_mass: row.payload_mass,
            class: row.class,
            launch_site: row.launch_site.clone(),
        };

        match series
            .iter_mut()
            .find(|s| s.category == row.booster_version_category)
        {
            Some(existing) => existing.points.push(point),
            None => {
                let color = CATEGORY_PALETTE[series.len() % CATEGORY_PALETTE.len()];
                series.push(ScatterSeries {
                    category: row.booster_version_category.clone(),
                    color: color.to_string(),
                    points: vec![point],
                });
            }
        }
    }

    ScatterChartData {
        title: scatter_title(site),
        site: site.clone(),
        x_label: PAYLOAD_AXIS_LABEL.to_string(),
        y_label: CLASS_AXIS_LABEL.to_string(),
        color_label: BOOSTER_LEGEND_LABEL.to_string(),
        series,
        total_points: rows.len(),
        payload_stats: payload_stats(rows),
    }
}
