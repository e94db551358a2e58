// File: crates/energy-dashboard/tests/views.rs
// Purpose: View-model shaping from API data.

use energy_api::{DashboardSummary, Priority, Recommendation, RecommendationKind};
use energy_dashboard::{sample, views};

fn summary_with_change(change: f64) -> DashboardSummary {
    DashboardSummary {
        comparison_percent: change,
        ..sample::overview().summary
    }
}

#[test]
fn top_consumers_are_ranked_from_one() {
    let rows = views::top_consumer_rows(&sample::top_appliances());
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].name, "Water heater");
    // ungrouped appliances get the placeholder group
    assert_eq!(rows[4].group, "No group");
}

#[test]
fn month_cards_cap_at_six() {
    let cards = views::month_cards(&sample::analytics().monthly);
    assert_eq!(cards.len(), 6);
    assert_eq!(cards[0].title, "July 2025");
}

#[test]
fn comparison_formats_the_signed_change() {
    let up = views::comparison(&summary_with_change(4.25));
    assert_eq!(up.trend, views::Trend::Up);
    assert_eq!(up.change_text, "+4.2%");

    let down = views::comparison(&summary_with_change(-3.0));
    assert_eq!(down.trend, views::Trend::Down);
    assert_eq!(down.change_text, "-3.0%");

    let flat = views::comparison(&summary_with_change(0.0));
    assert_eq!(flat.trend, views::Trend::Flat);
    assert_eq!(flat.change_text, "0.0%");
}

#[test]
fn recommendation_title_falls_back_to_appliance_then_default() {
    let recs = vec![
        Recommendation {
            kind: RecommendationKind::General,
            title: Some("Lighting".to_string()),
            appliance: None,
            message: "switch to LED".to_string(),
            priority: Priority::High,
            daily_kwh: None,
            savings_per_kwh: None,
        },
        Recommendation {
            kind: RecommendationKind::HighConsumption,
            title: None,
            appliance: Some("Heater".to_string()),
            message: "heavy consumer".to_string(),
            priority: Priority::High,
            daily_kwh: Some(24.0),
            savings_per_kwh: None,
        },
        Recommendation {
            kind: RecommendationKind::TariffOptimization,
            title: None,
            appliance: None,
            message: "run at night".to_string(),
            priority: Priority::Medium,
            daily_kwh: None,
            savings_per_kwh: Some(2.5),
        },
    ];

    let cards = views::recommendation_cards(&recs);
    assert_eq!(cards[0].title, "Lighting");
    assert_eq!(cards[0].icon, "💡");
    assert_eq!(cards[1].title, "Heater");
    assert_eq!(cards[1].icon, "⚡");
    assert_eq!(cards[2].title, "Recommendation");
    assert_eq!(cards[2].icon, "💰");
}
