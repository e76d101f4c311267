//! Filtering, chart building and the reactive binder over the fixture dataset.

mod support;

use std::sync::Arc;

use launch_dash::api::{ControlEvent, OutcomeClass, PayloadRange, SiteSelection};
use launch_dash::db::{load_dataset, LaunchDataset};
use launch_dash::models::LaunchRecord;
use launch_dash::services::{
    build_pie_chart, build_scatter_chart, compute_pie_data, compute_scatter_data,
    describe_controls, Dashboard,
};
use launch_dash::db::config::ControlSettings;
use support::fixture_path;

fn fixture() -> Arc<LaunchDataset> {
    Arc::new(load_dataset(fixture_path()).unwrap())
}

#[test]
fn test_documented_scenario() {
    let records = vec![
        LaunchRecord::new("SiteA", 500.0, OutcomeClass::Success, "v1.0"),
        LaunchRecord::new("SiteA", 2000.0, OutcomeClass::Failure, "v1.0"),
        LaunchRecord::new("SiteB", 1500.0, OutcomeClass::Success, "v1.0"),
    ];

    let all = compute_pie_data(&records, &SiteSelection::All);
    assert_eq!(all.get(&OutcomeClass::Success), Some(&2));
    assert_eq!(all.get(&OutcomeClass::Failure), Some(&1));

    let site_a = compute_pie_data(&records, &SiteSelection::site("SiteA"));
    assert_eq!(site_a.get(&OutcomeClass::Success), Some(&1));
    assert_eq!(site_a.get(&OutcomeClass::Failure), Some(&1));

    let rows = compute_scatter_data(
        &records,
        &SiteSelection::All,
        &PayloadRange::new(1000.0, 2000.0),
    );
    let summary: Vec<(&str, f64, u8)> = rows
        .iter()
        .map(|r| (r.launch_site.as_str(), r.payload_mass.value(), r.class.value()))
        .collect();
    assert_eq!(summary, vec![("SiteA", 2000.0, 0), ("SiteB", 1500.0, 1)]);
}

#[test]
fn test_fixture_pie_all_sites() {
    let dataset = fixture();
    let counts = compute_pie_data(dataset.records(), &SiteSelection::All);
    let chart = build_pie_chart(&counts, &SiteSelection::All);

    assert_eq!(chart.total, 20);
    assert_eq!(chart.count_for(OutcomeClass::Success), 8);
    assert_eq!(chart.count_for(OutcomeClass::Failure), 12);
}

#[test]
fn test_fixture_pie_site_with_only_failures() {
    let dataset = fixture();
    let site = SiteSelection::site("CCAFS LC-40");
    let chart = build_pie_chart(&compute_pie_data(dataset.records(), &site), &site);

    assert_eq!(chart.slices.len(), 1);
    assert_eq!(chart.slices[0].class, OutcomeClass::Failure);
    assert_eq!(chart.slices[0].count, 9);
}

#[test]
fn test_fixture_scatter_range() {
    let dataset = fixture();
    let rows = compute_scatter_data(
        dataset.records(),
        &SiteSelection::All,
        &PayloadRange::new(2000.0, 4000.0),
    );
    assert_eq!(rows.len(), 7);

    let chart = build_scatter_chart(&rows, &SiteSelection::All);
    let categories: Vec<&str> = chart.series.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(categories, vec!["v1.1", "FT", "B5"]);
    assert_eq!(chart.payload_stats.count, 7);
    assert_eq!(chart.payload_stats.min, 2150.0);
    assert_eq!(chart.payload_stats.max, 3696.65);
}

#[test]
fn test_fixture_full_range_returns_everything() {
    let dataset = fixture();
    let rows = compute_scatter_data(
        dataset.records(),
        &SiteSelection::All,
        &PayloadRange::full(dataset.payload_bounds()),
    );
    assert_eq!(rows.len(), dataset.len());
}

#[test]
fn test_fixture_controls() {
    let dataset = fixture();
    let controls = describe_controls(&dataset, &ControlSettings::default());

    let values: Vec<&str> = controls
        .site_dropdown
        .options
        .iter()
        .map(|o| o.value.as_value())
        .collect();
    assert_eq!(
        values,
        vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
    assert_eq!(controls.payload_slider.marks.len(), 10);
}

#[test]
fn test_binder_session() {
    let mut dashboard = Dashboard::new(fixture());

    let first = dashboard.render();
    assert_eq!(first.pie.unwrap().total, 20);
    assert_eq!(first.scatter.unwrap().series.len(), 5);

    let update = dashboard.dispatch(ControlEvent::SiteChanged(SiteSelection::site("KSC LC-39A")));
    let pie = update.pie.unwrap();
    assert_eq!(pie.count_for(OutcomeClass::Success), 3);
    assert_eq!(pie.count_for(OutcomeClass::Failure), 1);
    let scatter = update.scatter.unwrap();
    assert_eq!(scatter.total_points, 4);
    assert_eq!(scatter.series.len(), 1);

    let update = dashboard.dispatch(ControlEvent::PayloadRangeChanged(PayloadRange::new(
        3000.0, 6000.0,
    )));
    assert!(update.pie.is_none());
    assert_eq!(update.scatter.unwrap().total_points, 3);
    assert_eq!(update.state.site, SiteSelection::site("KSC LC-39A"));
}
