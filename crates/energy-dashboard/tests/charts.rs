// File: crates/energy-dashboard/tests/charts.rs
// Purpose: Chart-input shaping and end-to-end sample renders.

use std::sync::Arc;

use chrono::NaiveDate;
use energy_api::ApiClient;
use energy_charts::palette::parse_hex;
use energy_charts::{ChartEngine, Palette, SurfaceMap};
use energy_dashboard::dashboard::{
    self, DAILY_CHART, DAILY_HISTORY_CHART, GROUPS_CHART, MONTHLY_CHART,
};
use energy_dashboard::{sample, Dashboard, MemoryNotifier};

fn offline_dashboard() -> Dashboard {
    let client = ApiClient::new("http://localhost:1/api").expect("client");
    let engine = ChartEngine::new(Palette::dark(), SurfaceMap::new());
    Dashboard::new(client, engine, Arc::new(MemoryNotifier::new()))
}

#[test]
fn day_labels_use_short_month_names() {
    let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
    assert_eq!(dashboard::day_label(date), "5 Aug");
}

#[test]
fn group_series_parses_configured_colors() {
    let (series, colors) = dashboard::group_series(&sample::groups());
    assert_eq!(series.len(), 5);
    assert_eq!(series.labels()[0], "Kitchen");
    assert_eq!(colors[0], parse_hex("#e67e22"));
    // every sample group carries a parseable color
    assert!(colors.iter().all(Option::is_some));
}

#[test]
fn overview_charts_render_from_sample_data() {
    let mut dashboard = offline_dashboard();
    dashboard
        .render_overview_charts(&sample::overview())
        .expect("render should succeed");

    assert!(dashboard.engine().surfaces().png_bytes(DAILY_CHART).is_some());
    assert!(dashboard.engine().surfaces().png_bytes(GROUPS_CHART).is_some());
}

#[test]
fn analytics_charts_render_from_sample_data() {
    let mut dashboard = offline_dashboard();
    dashboard
        .render_analytics_charts(&sample::analytics())
        .expect("render should succeed");

    assert!(dashboard
        .engine()
        .surfaces()
        .png_bytes(DAILY_HISTORY_CHART)
        .is_some());
    assert!(dashboard.engine().surfaces().png_bytes(MONTHLY_CHART).is_some());
}
