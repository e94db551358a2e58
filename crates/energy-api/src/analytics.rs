// File: crates/energy-api/src/analytics.rs
// Summary: Analytics endpoints: dashboard numbers, history, forecast, export.

use chrono::NaiveDate;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{DailyStat, DashboardSummary, Forecast, GroupStat, MonthlyStat, Recommendation};

impl ApiClient {
    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        self.get("/analytics/dashboard").await
    }

    /// Per-day consumption for the trailing `days` days.
    pub async fn daily_stats(&self, days: u32) -> Result<Vec<DailyStat>> {
        self.get(&format!("/analytics/daily?days={days}")).await
    }

    /// Per-month totals, most recent first.
    pub async fn monthly_stats(&self) -> Result<Vec<MonthlyStat>> {
        self.get("/analytics/monthly").await
    }

    pub async fn forecast(&self) -> Result<Forecast> {
        self.get("/analytics/forecast").await
    }

    pub async fn recommendations(&self) -> Result<Vec<Recommendation>> {
        self.get("/analytics/recommendations").await
    }

    pub async fn group_stats(&self) -> Result<Vec<GroupStat>> {
        self.get("/analytics/groups").await
    }

    /// Consumption report as raw CSV text. Without a range the server
    /// defaults to the trailing 30 days.
    pub async fn export_csv(&self, range: Option<(NaiveDate, NaiveDate)>) -> Result<String> {
        let path = match range {
            Some((start, end)) => format!("/analytics/export?startDate={start}&endDate={end}"),
            None => "/analytics/export".to_string(),
        };
        self.request_text(Method::GET, &path).await
    }
}
