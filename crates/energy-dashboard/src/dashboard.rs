// File: crates/energy-dashboard/src/dashboard.rs
// Summary: Dashboard orchestration: concurrent fetch, chart shaping, refresh wiring.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use energy_api::{
    ApiClient, Appliance, DailyStat, DashboardSummary, Forecast, GroupStat, MonthlyStat, Tariff,
};
use energy_charts::palette::parse_hex;
use energy_charts::skia_safe::Color;
use energy_charts::{BarStyle, CategorySeries, ChartEngine, LineStyle, ResizeCoordinator};
use tokio::sync::mpsc;

use crate::notify::Notifier;

/// Surface ids, matching the canvas ids of the web dashboard.
pub const DAILY_CHART: &str = "consumption-chart";
pub const GROUPS_CHART: &str = "groups-chart";
pub const DAILY_HISTORY_CHART: &str = "daily-chart";
pub const MONTHLY_CHART: &str = "monthly-chart";

/// Days of history shown on the overview chart.
pub const OVERVIEW_DAYS: u32 = 7;
/// Days of history shown on the analytics chart.
pub const ANALYTICS_DAYS: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Overview,
    Analytics,
}

/// Everything the overview section displays.
#[derive(Clone, Debug)]
pub struct OverviewData {
    pub summary: DashboardSummary,
    pub top: Vec<Appliance>,
    pub groups: Vec<GroupStat>,
    pub forecast: Forecast,
    pub tariff: Tariff,
    pub daily: Vec<DailyStat>,
}

/// Everything the analytics section displays.
#[derive(Clone, Debug)]
pub struct AnalyticsData {
    pub daily: Vec<DailyStat>,
    pub monthly: Vec<MonthlyStat>,
    pub summary: DashboardSummary,
}

/// Owns the API client, the chart engine and the active section; loads
/// section data and keeps the charts redrawn.
pub struct Dashboard {
    client: ApiClient,
    engine: ChartEngine,
    notifier: Arc<dyn Notifier>,
    section: Section,
}

impl Dashboard {
    /// Wire the pieces together and register the chart surfaces.
    pub fn new(client: ApiClient, mut engine: ChartEngine, notifier: Arc<dyn Notifier>) -> Self {
        for id in [DAILY_CHART, GROUPS_CHART, DAILY_HISTORY_CHART, MONTHLY_CHART] {
            engine.surfaces().insert_default(id);
        }
        Self {
            client,
            engine,
            notifier,
            section: Section::Overview,
        }
    }

    pub fn engine(&mut self) -> &mut ChartEngine {
        &mut self.engine
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Load the overview section. A backend failure is reported as a
    /// notification and yields `None`; the caller stays interactive.
    pub async fn load_overview(&mut self) -> Option<OverviewData> {
        let data = match self.fetch_overview().await {
            Ok(data) => data,
            Err(e) => {
                self.notifier.error(format!("Failed to load dashboard: {e}"));
                return None;
            }
        };
        if let Err(e) = self.render_overview_charts(&data) {
            self.notifier.error(format!("Failed to render charts: {e}"));
        }
        Some(data)
    }

    async fn fetch_overview(&self) -> energy_api::Result<OverviewData> {
        let (summary, top, groups, forecast, tariff, daily) = tokio::try_join!(
            self.client.dashboard(),
            self.client.top_appliances(),
            self.client.group_stats(),
            self.client.forecast(),
            self.client.current_tariff(),
            self.client.daily_stats(OVERVIEW_DAYS),
        )?;
        Ok(OverviewData {
            summary,
            top,
            groups,
            forecast,
            tariff,
            daily,
        })
    }

    /// Draw the overview charts from already-fetched data.
    pub fn render_overview_charts(&mut self, data: &OverviewData) -> energy_charts::Result<()> {
        let style = LineStyle {
            color: Some(self.engine.palette().primary),
        };
        self.engine
            .line(DAILY_CHART, &daily_series(&data.daily), &style)?;

        let (groups, colors) = group_series(&data.groups);
        self.engine.pie(GROUPS_CHART, &groups, &colors)?;
        Ok(())
    }

    /// Load the analytics section; same failure contract as the overview.
    pub async fn load_analytics(&mut self) -> Option<AnalyticsData> {
        let data = match self.fetch_analytics().await {
            Ok(data) => data,
            Err(e) => {
                self.notifier.error(format!("Failed to load analytics: {e}"));
                return None;
            }
        };
        if let Err(e) = self.render_analytics_charts(&data) {
            self.notifier.error(format!("Failed to render charts: {e}"));
        }
        Some(data)
    }

    async fn fetch_analytics(&self) -> energy_api::Result<AnalyticsData> {
        let (daily, monthly, summary) = tokio::try_join!(
            self.client.daily_stats(ANALYTICS_DAYS),
            self.client.monthly_stats(),
            self.client.dashboard(),
        )?;
        Ok(AnalyticsData {
            daily,
            monthly,
            summary,
        })
    }

    /// Draw the analytics charts from already-fetched data.
    pub fn render_analytics_charts(&mut self, data: &AnalyticsData) -> energy_charts::Result<()> {
        let style = LineStyle {
            color: Some(self.engine.palette().primary),
        };
        self.engine
            .line(DAILY_HISTORY_CHART, &daily_series(&data.daily), &style)?;

        // the backend lists months newest first; flip into calendar order
        let monthly = CategorySeries::from_pairs(
            data.monthly
                .iter()
                .rev()
                .map(|m| (m.month_name.clone(), m.total_kwh)),
        );
        let bars = BarStyle {
            colors: Some(self.engine.palette().series.clone()),
        };
        self.engine.bar(MONTHLY_CHART, &monthly, &bars)?;
        Ok(())
    }

    /// Re-fetch and redraw the charts of the active section; wired as the
    /// resize-refresh callback target.
    pub async fn refresh_charts(&mut self) {
        match self.section {
            Section::Overview => {
                let fresh = tokio::try_join!(
                    self.client.group_stats(),
                    self.client.daily_stats(OVERVIEW_DAYS)
                );
                match fresh {
                    Ok((groups, daily)) => {
                        let style = LineStyle {
                            color: Some(self.engine.palette().primary),
                        };
                        let (series, colors) = group_series(&groups);
                        let drawn = self
                            .engine
                            .line(DAILY_CHART, &daily_series(&daily), &style)
                            .and_then(|()| self.engine.pie(GROUPS_CHART, &series, &colors));
                        if let Err(e) = drawn {
                            self.notifier.error(format!("Failed to render charts: {e}"));
                        }
                    }
                    Err(e) => self
                        .notifier
                        .error(format!("Failed to refresh charts: {e}")),
                }
            }
            Section::Analytics => {
                let _ = self.load_analytics().await;
            }
        }
    }
}

/// Build the resize coordinator whose debounced callback pings `refresh`;
/// the receiving loop calls [`Dashboard::refresh_charts`].
pub fn resize_refresher(refresh: mpsc::UnboundedSender<()>) -> ResizeCoordinator {
    ResizeCoordinator::new(move || {
        let _ = refresh.send(());
    })
}

// ---- helpers ----------------------------------------------------------------

/// "5 Aug" style label for daily history charts.
pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%b"))
}

pub fn daily_series(days: &[DailyStat]) -> CategorySeries {
    CategorySeries::from_pairs(days.iter().map(|d| (day_label(d.date), d.kwh)))
}

/// Group stats as a pie input: named daily totals plus each group's
/// configured color. Unparseable colors fall back to the series cycle.
pub fn group_series(groups: &[GroupStat]) -> (CategorySeries, Vec<Option<Color>>) {
    let series = CategorySeries::from_pairs(groups.iter().map(|g| (g.name.clone(), g.daily_kwh)));
    let colors = groups
        .iter()
        .map(|g| g.color.as_deref().and_then(parse_hex))
        .collect();
    (series, colors)
}
