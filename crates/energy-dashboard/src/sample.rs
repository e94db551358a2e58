// File: crates/energy-dashboard/src/sample.rs
// Summary: Deterministic sample data so the demo renders without a live backend.

use chrono::{Duration, NaiveDate};
use energy_api::{
    Appliance, DailyStat, DashboardSummary, Forecast, GroupStat, MonthlyStat, Tariff, TariffKind,
};

use crate::dashboard::{AnalyticsData, OverviewData};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid sample date")
}

pub fn daily(days: u32) -> Vec<DailyStat> {
    (0..days)
        .map(|i| {
            let kwh = 8.0 + (i as f64 * 0.9).sin().abs() * 4.0;
            DailyStat {
                date: base_date() + Duration::days(i as i64),
                kwh: (kwh * 100.0).round() / 100.0,
                cost: (kwh * 5.0 * 100.0).round() / 100.0,
            }
        })
        .collect()
}

pub fn groups() -> Vec<GroupStat> {
    let rows: [(i64, &str, &str, u32, f64); 5] = [
        (1, "Kitchen", "#e67e22", 4, 4.8),
        (2, "Climate", "#3498db", 2, 6.1),
        (3, "Lighting", "#f1c40f", 9, 1.9),
        (4, "Entertainment", "#9b59b6", 3, 1.2),
        (5, "Garage", "#2ecc71", 1, 0.0),
    ];
    rows.iter()
        .map(|&(id, name, color, count, daily_kwh)| GroupStat {
            id,
            name: name.to_string(),
            color: Some(color.to_string()),
            appliance_count: count,
            daily_kwh,
            monthly_kwh: daily_kwh * 30.0,
            daily_cost: daily_kwh * 5.0,
            monthly_cost: daily_kwh * 150.0,
        })
        .collect()
}

pub fn top_appliances() -> Vec<Appliance> {
    let rows: [(i64, &str, Option<&str>, f64, f64); 5] = [
        (1, "Water heater", Some("Climate"), 2000.0, 3.0),
        (2, "Fridge", Some("Kitchen"), 150.0, 24.0),
        (3, "Washing machine", Some("Kitchen"), 1800.0, 1.5),
        (4, "Air conditioner", Some("Climate"), 1200.0, 2.0),
        (5, "Desktop PC", None, 350.0, 6.0),
    ];
    rows.iter()
        .map(|&(id, name, group, power_watts, hours)| {
            let daily_kwh = power_watts * hours / 1000.0;
            Appliance {
                id,
                name: name.to_string(),
                power_watts,
                daily_usage_hours: hours,
                quantity: 1,
                group_id: group.map(|_| id),
                group_name: group.map(|g| g.to_string()),
                is_active: true,
                daily_kwh,
                monthly_kwh: daily_kwh * 30.0,
                daily_cost: daily_kwh * 5.0,
                monthly_cost: daily_kwh * 150.0,
            }
        })
        .collect()
}

pub fn overview() -> OverviewData {
    let daily = daily(7);
    let daily_kwh: f64 = groups().iter().map(|g| g.daily_kwh).sum();
    OverviewData {
        summary: DashboardSummary {
            daily_kwh,
            monthly_kwh: daily_kwh * 30.0,
            daily_cost: daily_kwh * 5.0,
            monthly_cost: daily_kwh * 150.0,
            comparison_percent: -4.2,
            current_month_kwh: 88.1,
            current_month_cost: 440.5,
            appliance_count: 19,
            group_count: 5,
            current_tariff: Some("Flat".to_string()),
            current_rate: Some(5.0),
        },
        top: top_appliances(),
        groups: groups(),
        forecast: Forecast {
            projected_monthly_kwh: 420.0,
            projected_monthly_cost: 2100.0,
            remaining_days: 12,
            average_daily_kwh: daily_kwh,
            projected_yearly_kwh: 5110.0,
            projected_yearly_cost: 25550.0,
        },
        tariff: Tariff {
            id: 1,
            name: "Flat".to_string(),
            tariff_type: TariffKind::Flat,
            rate_per_kwh: 5.0,
            start_hour: 0,
            end_hour: 24,
            is_active: true,
            valid_from: Some(base_date()),
            valid_to: None,
        },
        daily,
    }
}

pub fn analytics() -> AnalyticsData {
    let months = [
        "July", "June", "May", "April", "March", "February", "January",
    ];
    let monthly = months
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let total_kwh = 300.0 + (i as f64 * 1.3).cos().abs() * 90.0;
            MonthlyStat {
                year: 2025,
                month: 7 - i as u32,
                month_name: name.to_string(),
                total_kwh: (total_kwh * 100.0).round() / 100.0,
                total_cost: (total_kwh * 5.0 * 100.0).round() / 100.0,
            }
        })
        .collect();
    AnalyticsData {
        daily: daily(30),
        monthly,
        summary: overview().summary,
    }
}

/// A consumption report in the backend's semicolon-delimited layout.
pub fn export_csv() -> String {
    let mut csv = String::from("Date;Appliance;Consumption (kWh);Cost;Tariff;Hours\n");
    for (i, day) in daily(5).iter().enumerate() {
        csv.push_str(&format!(
            "{};{};{:.4};{:.2};{};{:.2}\n",
            day.date,
            ["Fridge", "Water heater"][i % 2],
            day.kwh,
            day.cost,
            "flat",
            4.0 + i as f64,
        ));
    }
    csv
}
