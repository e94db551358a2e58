// File: crates/energy-api/tests/decode.rs
// Purpose: Wire-type decoding against captured backend payloads.

use energy_api::{
    Ack, Appliance, AuthStatus, DailyStat, DashboardSummary, GroupStat, MonthlyStat, Priority,
    Recommendation, RecommendationKind, Tariff, TariffKind, UserInfo,
};

#[test]
fn dashboard_summary_decodes() {
    let body = r#"{
        "dailyKwh": 12.34, "monthlyKwh": 370.2, "dailyCost": 61.7, "monthlyCost": 1851.0,
        "comparisonPercent": -4.2, "currentMonthKwh": 88.1, "currentMonthCost": 440.5,
        "applianceCount": 7, "groupCount": 3,
        "currentTariff": "Day", "currentRate": 5.0
    }"#;
    let summary: DashboardSummary = serde_json::from_str(body).unwrap();
    assert_eq!(summary.appliance_count, 7);
    assert_eq!(summary.current_tariff.as_deref(), Some("Day"));
    assert!(summary.comparison_percent < 0.0);
}

#[test]
fn dashboard_summary_tolerates_missing_tariff() {
    let body = r#"{
        "dailyKwh": 0.0, "monthlyKwh": 0.0, "dailyCost": 0.0, "monthlyCost": 0.0,
        "comparisonPercent": 0.0, "currentMonthKwh": 0.0, "currentMonthCost": 0.0,
        "applianceCount": 0, "groupCount": 0
    }"#;
    let summary: DashboardSummary = serde_json::from_str(body).unwrap();
    assert!(summary.current_tariff.is_none());
    assert!(summary.current_rate.is_none());
}

#[test]
fn appliance_row_decodes_with_nullable_group() {
    let body = r#"{
        "id": 5, "name": "Fridge", "powerWatts": 150.0, "dailyUsageHours": 24.0,
        "quantity": 1, "groupId": null, "groupName": null, "isActive": true,
        "dailyKwh": 3.6, "monthlyKwh": 108.0, "dailyCost": 18.0, "monthlyCost": 540.0
    }"#;
    let appliance: Appliance = serde_json::from_str(body).unwrap();
    assert_eq!(appliance.name, "Fridge");
    assert!(appliance.group_id.is_none());
    assert_eq!(appliance.daily_kwh, 3.6);
}

#[test]
fn daily_stat_parses_iso_dates() {
    let body = r#"[{"date": "2025-08-01", "kwh": 10.5, "cost": 52.5}]"#;
    let days: Vec<DailyStat> = serde_json::from_str(body).unwrap();
    assert_eq!(days[0].date.to_string(), "2025-08-01");
}

#[test]
fn monthly_stat_decodes() {
    let body = r#"{"year": 2025, "month": 7, "monthName": "July", "totalKwh": 320.0, "totalCost": 1600.0}"#;
    let stat: MonthlyStat = serde_json::from_str(body).unwrap();
    assert_eq!(stat.month, 7);
    assert_eq!(stat.month_name, "July");
}

#[test]
fn group_stat_keeps_configured_color() {
    let body = r##"{
        "id": 1, "name": "Kitchen", "color": "#3498db", "applianceCount": 4,
        "dailyKwh": 6.2, "monthlyKwh": 186.0, "dailyCost": 31.0, "monthlyCost": 930.0
    }"##;
    let stat: GroupStat = serde_json::from_str(body).unwrap();
    assert_eq!(stat.color.as_deref(), Some("#3498db"));
}

#[test]
fn tariff_kind_is_a_closed_lowercase_enum() {
    let body = r#"{
        "id": 2, "name": "Night", "tariffType": "night", "ratePerKwh": 2.5,
        "startHour": 23, "endHour": 7, "isActive": true,
        "validFrom": "2025-01-01", "validTo": null
    }"#;
    let tariff: Tariff = serde_json::from_str(body).unwrap();
    assert_eq!(tariff.tariff_type, TariffKind::Night);
    assert!(tariff.valid_to.is_none());

    assert!(serde_json::from_str::<Tariff>(&body.replace("night", "weekend")).is_err());
}

#[test]
fn recommendation_variants_decode() {
    let body = r#"[
        {"type": "high_consumption", "appliance": "Heater", "dailyKwh": 24.0,
         "message": "uses a lot", "priority": "high"},
        {"type": "tariff_optimization", "message": "run at night",
         "priority": "medium", "savingsPerKwh": 2.5},
        {"type": "general", "title": "Lighting", "message": "switch to LED", "priority": "high"}
    ]"#;
    let recs: Vec<Recommendation> = serde_json::from_str(body).unwrap();
    assert_eq!(recs[0].kind, RecommendationKind::HighConsumption);
    assert_eq!(recs[0].appliance.as_deref(), Some("Heater"));
    assert_eq!(recs[1].priority, Priority::Medium);
    assert_eq!(recs[2].title.as_deref(), Some("Lighting"));
}

#[test]
fn ack_envelope_decodes_with_and_without_data() {
    let login = r#"{"success": true, "message": "welcome",
                    "data": {"id": 1, "username": "sam", "email": "s@x.io"}}"#;
    let ack: Ack<UserInfo> = serde_json::from_str(login).unwrap();
    assert!(ack.success);
    assert_eq!(ack.data.unwrap().username, "sam");

    let logout = r#"{"success": true, "message": "bye"}"#;
    let ack: Ack = serde_json::from_str(logout).unwrap();
    assert!(ack.data.is_none());
}

#[test]
fn auth_status_decodes_both_states() {
    let on: AuthStatus =
        serde_json::from_str(r#"{"authenticated": true, "userId": 9, "username": "sam"}"#).unwrap();
    assert!(on.authenticated);
    assert_eq!(on.user_id, Some(9));

    let off: AuthStatus = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
    assert!(!off.authenticated);
    assert!(off.username.is_none());
}
