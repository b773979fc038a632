//! End-to-end checks of the filter/aggregation pipeline over one fixture
//! dataset, including the documented selection scenarios.

use std::sync::Arc;

use launchdash::api::{ChartData, ChartId, LaunchDataset, LaunchRecord, Outcome};
use launchdash::models::{PayloadRange, Selection, SiteFilter};
use launchdash::services::{filter_records, payload_scatter, success_pie, Dashboard};

fn record(site: &str, mass: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
    LaunchRecord {
        launch_site: site.to_string(),
        payload_mass_kg: mass,
        outcome,
        booster_version_category: booster.to_string(),
    }
}

fn fixture_dataset() -> LaunchDataset {
    LaunchDataset::from_records(vec![
        record("A", 1000.0, Outcome::Failure, "v1.0"),
        record("A", 4000.0, Outcome::Success, "FT"),
        record("B", 2500.0, Outcome::Success, "v1.1"),
        record("B", 6000.0, Outcome::Success, "FT"),
        record("B", 8000.0, Outcome::Failure, "B4"),
    ])
    .unwrap()
}

fn selection(site: &str, min: f64, max: f64) -> Selection {
    Selection::new(SiteFilter::parse(site), PayloadRange::new(min, max).unwrap())
}

#[test]
fn filtered_view_is_subset_satisfying_predicates() {
    let dataset = fixture_dataset();
    let selections = [
        selection("ALL", 0.0, 10_000.0),
        selection("ALL", 2000.0, 6000.0),
        selection("A", 0.0, 10_000.0),
        selection("B", 3000.0, 7000.0),
        selection("unknown", 0.0, 10_000.0),
    ];

    for sel in &selections {
        let view = filter_records(&dataset, sel);
        assert!(view.len() <= dataset.len());
        for rec in &view {
            assert!(sel.payload.contains(rec.payload_mass_kg));
            assert!(sel.site.matches(&rec.launch_site));
        }
        // No matching record left out.
        let matching = dataset
            .records()
            .iter()
            .filter(|r| sel.payload.contains(r.payload_mass_kg) && sel.site.matches(&r.launch_site))
            .count();
        assert_eq!(view.len(), matching);
    }
}

#[test]
fn all_sites_pie_weights_sum_to_success_total() {
    let dataset = fixture_dataset();
    let sel = selection("ALL", 0.0, 10_000.0);
    let view = filter_records(&dataset, &sel);

    let pie = success_pie(&view, &sel);
    let weight_sum: u64 = pie.slices.iter().map(|s| s.value).sum();
    let success_total: u64 = view.iter().map(|r| u64::from(r.outcome.class())).sum();
    assert_eq!(weight_sum, success_total);
}

#[test]
fn specific_site_pie_weights_sum_to_view_size() {
    let dataset = fixture_dataset();
    let sel = selection("B", 0.0, 10_000.0);
    let view = filter_records(&dataset, &sel);

    let pie = success_pie(&view, &sel);
    let weight_sum: u64 = pie.slices.iter().map(|s| s.value).sum();
    assert_eq!(weight_sum, view.len() as u64);
}

#[test]
fn scatter_length_equals_view_size() {
    let dataset = fixture_dataset();
    for sel in [
        selection("ALL", 0.0, 10_000.0),
        selection("A", 2000.0, 6000.0),
        selection("ALL", 9999.0, 10_000.0),
    ] {
        let view = filter_records(&dataset, &sel);
        let scatter = payload_scatter(&view);
        assert_eq!(scatter.points.len(), view.len());
    }
}

#[test]
fn scenario_all_sites_full_range() {
    // Two sites, range covering everything: the view is the whole dataset
    // and the pie groups by site.
    let dataset = fixture_dataset();
    let sel = selection("ALL", 0.0, 10_000.0);

    let view = filter_records(&dataset, &sel);
    assert_eq!(view.len(), dataset.len());

    let pie = success_pie(&view, &sel);
    let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["A", "B"]);
}

#[test]
fn scenario_site_a_mid_range() {
    // Site A, range [2000, 6000]: the 1000kg record drops out, the 4000kg
    // success stays, and the pie has a single class=1 slice of weight 1.
    let dataset = fixture_dataset();
    let sel = selection("A", 2000.0, 6000.0);

    let view = filter_records(&dataset, &sel);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].payload_mass_kg, 4000.0);

    let pie = success_pie(&view, &sel);
    assert_eq!(pie.slices.len(), 1);
    assert_eq!(pie.slices[0].label, "1");
    assert_eq!(pie.slices[0].value, 1);
}

#[test]
fn scenario_range_excluding_everything() {
    let dataset = fixture_dataset();
    let sel = selection("ALL", 8500.0, 9000.0);

    let view = filter_records(&dataset, &sel);
    assert!(view.is_empty());

    let pie = success_pie(&view, &sel);
    assert!(pie.slices.is_empty());
    let scatter = payload_scatter(&view);
    assert!(scatter.points.is_empty());
}

#[test]
fn dashboard_apply_matches_individual_channels() {
    let dashboard = Dashboard::new(Arc::new(fixture_dataset()));
    let sel = selection("B", 0.0, 7000.0);

    let update = dashboard.apply(&sel);
    match dashboard.chart(ChartId::SuccessPie, &sel) {
        ChartData::SuccessPie(pie) => assert_eq!(pie, update.pie),
        other => panic!("expected pie data, got {other:?}"),
    }
    match dashboard.chart(ChartId::PayloadScatter, &sel) {
        ChartData::PayloadScatter(scatter) => assert_eq!(scatter, update.scatter),
        other => panic!("expected scatter data, got {other:?}"),
    }
}

#[test]
fn recompute_is_deterministic_across_calls() {
    let dashboard = Dashboard::new(Arc::new(fixture_dataset()));
    let sel = selection("ALL", 1000.0, 8000.0);

    let first = dashboard.apply(&sel);
    let second = dashboard.apply(&sel);
    assert_eq!(first, second);
}
