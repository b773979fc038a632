//! Functional tests against the CSV shipped with the crate, exercising the
//! same load path the server binary uses.

use std::path::Path;
use std::sync::Arc;

use launchdash::models::{PayloadRange, Selection, SiteFilter};
use launchdash::parsing::load_dataset;
use launchdash::services::Dashboard;

#[test]
fn shipped_dataset_loads_and_satisfies_invariants() {
    let dataset = load_dataset(Path::new("data/spacex_launch_dash.csv")).unwrap();

    assert!(!dataset.is_empty());
    assert_eq!(
        dataset.sites(),
        ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
    for record in dataset.records() {
        assert!(record.payload_mass_kg.is_finite());
        assert!(record.payload_mass_kg >= 0.0);
    }

    let (min, max) = dataset.payload_extent();
    assert!(min <= max);
    assert!(max <= 10_000.0);
}

#[test]
fn shipped_dataset_drives_the_dashboard() {
    let dataset = load_dataset(Path::new("data/spacex_launch_dash.csv")).unwrap();
    let total = dataset.len();
    let dashboard = Dashboard::new(Arc::new(dataset));

    let all = Selection::new(
        SiteFilter::All,
        PayloadRange::new(0.0, 10_000.0).unwrap(),
    );
    let update = dashboard.apply(&all);
    assert_eq!(update.scatter.points.len(), total);
    // Four sites in the fixture, each with at least one launch in range.
    assert_eq!(update.pie.slices.len(), 4);

    let narrow = Selection::new(
        SiteFilter::parse("KSC LC-39A"),
        PayloadRange::new(5000.0, 7000.0).unwrap(),
    );
    let update = dashboard.apply(&narrow);
    assert_eq!(update.scatter.points.len(), update.pie.slices.iter().map(|s| s.value).sum::<u64>() as usize);
    assert!(update
        .scatter
        .points
        .iter()
        .all(|p| (5000.0..=7000.0).contains(&p.payload_mass_kg)));
}
