// File: crates/energy-api/src/types.rs
// Summary: Wire types for the energy backend (camelCase JSON).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Standard mutation envelope: `{"success": true, "message": ..., "data": ...}`.
#[derive(Clone, Debug, Deserialize)]
pub struct Ack<T = serde_json::Value> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Session probe result; `user_id`/`username` only accompany a live session.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Registration<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// An appliance as listed by the backend, including the per-day consumption
/// and cost the server derives from power, usage hours and quantity.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    pub id: i64,
    pub name: String,
    pub power_watts: f64,
    pub daily_usage_hours: f64,
    pub quantity: u32,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub group_name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub daily_kwh: f64,
    #[serde(default)]
    pub monthly_kwh: f64,
    #[serde(default)]
    pub daily_cost: f64,
    #[serde(default)]
    pub monthly_cost: f64,
}

/// Create/update payload for an appliance.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppliance {
    pub name: String,
    pub power_watts: f64,
    pub daily_usage_hours: f64,
    pub quantity: u32,
    pub group_id: Option<i64>,
}

/// Create acknowledgement payload: the stored appliance plus an optional
/// usage tip the client may surface as a notification.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApplianceCreated {
    #[serde(flatten)]
    pub appliance: Appliance,
    #[serde(default)]
    pub tip: Option<String>,
}

/// Aggregate totals across all active appliances.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceStats {
    pub total_daily_kwh: f64,
    pub total_monthly_kwh: f64,
    pub total_daily_cost: f64,
    pub total_monthly_cost: f64,
    pub avg_tariff: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub appliance_count: u32,
    #[serde(default)]
    pub total_daily_kwh: f64,
    #[serde(default)]
    pub total_monthly_kwh: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Time-of-day pricing rule kinds.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TariffKind {
    Peak,
    Shoulder,
    Night,
    Flat,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    pub id: i64,
    pub name: String,
    pub tariff_type: TariffKind,
    pub rate_per_kwh: f64,
    pub start_hour: u8,
    pub end_hour: u8,
    pub is_active: bool,
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTariff {
    pub name: String,
    pub tariff_type: TariffKind,
    pub rate_per_kwh: f64,
    pub start_hour: u8,
    pub end_hour: u8,
    pub valid_from: Option<NaiveDate>,
}

/// Headline numbers for the overview panel.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub comparison_percent: f64,
    pub current_month_kwh: f64,
    pub current_month_cost: f64,
    pub appliance_count: u32,
    pub group_count: u32,
    #[serde(default)]
    pub current_tariff: Option<String>,
    #[serde(default)]
    pub current_rate: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub date: NaiveDate,
    pub kwh: f64,
    pub cost: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStat {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub total_kwh: f64,
    pub total_cost: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub projected_monthly_kwh: f64,
    pub projected_monthly_cost: f64,
    pub remaining_days: i64,
    pub average_daily_kwh: f64,
    pub projected_yearly_kwh: f64,
    pub projected_yearly_cost: f64,
}

/// Per-group consumption aggregate used by the overview donut chart.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStat {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub appliance_count: u32,
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    HighConsumption,
    TariffOptimization,
    General,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A saving suggestion. `title` is set for general advice; consumption
/// warnings carry the offending `appliance` instead.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub appliance: Option<String>,
    pub message: String,
    pub priority: Priority,
    #[serde(default)]
    pub daily_kwh: Option<f64>,
    #[serde(default)]
    pub savings_per_kwh: Option<f64>,
}
