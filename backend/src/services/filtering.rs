//! Filter-and-aggregate engine.
//!
//! Pure functions over the immutable record slice; nothing here keeps state
//! between calls.

use crate::api::OutcomeCounts;
use crate::models::{LaunchRecord, PayloadRange, SiteSelection};

/// Rows launched from `site` (every row for [`SiteSelection::All`]).
pub fn filter_by_site<'a>(
    records: &'a [LaunchRecord],
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    records.iter().filter(move |r| site.matches(&r.launch_site))
}

/// Count launches per outcome class for the selected site.
///
/// The payload range plays no part here. An unknown site yields an empty map.
pub fn compute_pie_data(records: &[LaunchRecord], site: &SiteSelection) -> OutcomeCounts {
    let mut counts = OutcomeCounts::new();
    for record in filter_by_site(records, site) {
        *counts.entry(record.class).or_insert(0) += 1;
    }
    counts
}

/// Rows whose payload lies in the closed `range` and whose site matches.
///
/// Dataset order is preserved. An inverted or out-of-bounds range yields an
/// empty subset.
pub fn compute_scatter_data<'a>(
    records: &'a [LaunchRecord],
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.payload_mass))
        .filter(|r| site.matches(&r.launch_site))
        .collect()
}

#[cfg(test)]
#[path = "filtering_tests.rs"]
mod filtering_tests;
