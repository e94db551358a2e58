// File: crates/energy-dashboard/src/views.rs
// Summary: View models shaped from API data; render targets live elsewhere.

use energy_api::{Appliance, DashboardSummary, MonthlyStat, Priority, Recommendation, RecommendationKind};

/// One row of the "top consumers" panel, rank starting at 1.
#[derive(Clone, Debug, PartialEq)]
pub struct TopConsumerRow {
    pub rank: usize,
    pub name: String,
    pub group: String,
    pub daily_kwh: f64,
    pub daily_cost: f64,
}

pub fn top_consumer_rows(appliances: &[Appliance]) -> Vec<TopConsumerRow> {
    appliances
        .iter()
        .enumerate()
        .map(|(i, appliance)| TopConsumerRow {
            rank: i + 1,
            name: appliance.name.clone(),
            group: appliance
                .group_name
                .clone()
                .unwrap_or_else(|| "No group".to_string()),
            daily_kwh: appliance.daily_kwh,
            daily_cost: appliance.daily_cost,
        })
        .collect()
}

/// One month summary card; the analytics view shows at most six.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthCard {
    pub title: String,
    pub total_kwh: f64,
    pub total_cost: f64,
}

pub fn month_cards(stats: &[MonthlyStat]) -> Vec<MonthCard> {
    stats
        .iter()
        .take(6)
        .map(|stat| MonthCard {
            title: format!("{} {}", stat.month_name, stat.year),
            total_kwh: stat.total_kwh,
            total_cost: stat.total_cost,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Month-over-month comparison panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonView {
    pub current_month_kwh: f64,
    pub current_month_cost: f64,
    pub change_percent: f64,
    pub trend: Trend,
    pub change_text: String,
}

pub fn comparison(summary: &DashboardSummary) -> ComparisonView {
    let change = summary.comparison_percent;
    let trend = if change > 0.0 {
        Trend::Up
    } else if change < 0.0 {
        Trend::Down
    } else {
        Trend::Flat
    };
    // rising consumption keeps its sign visible
    let change_text = if change > 0.0 {
        format!("+{change:.1}%")
    } else {
        format!("{change:.1}%")
    };
    ComparisonView {
        current_month_kwh: summary.current_month_kwh,
        current_month_cost: summary.current_month_cost,
        change_percent: change,
        trend,
        change_text,
    }
}

/// A recommendation ready for display: icon by kind, title with the same
/// fallback chain the web client uses.
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationCard {
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub priority: Priority,
}

pub fn recommendation_cards(recommendations: &[Recommendation]) -> Vec<RecommendationCard> {
    recommendations
        .iter()
        .map(|rec| RecommendationCard {
            icon: match rec.kind {
                RecommendationKind::HighConsumption => "⚡",
                RecommendationKind::TariffOptimization => "💰",
                RecommendationKind::General => "💡",
            },
            title: rec
                .title
                .clone()
                .or_else(|| rec.appliance.clone())
                .unwrap_or_else(|| "Recommendation".to_string()),
            message: rec.message.clone(),
            priority: rec.priority,
        })
        .collect()
}
