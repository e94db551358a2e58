// File: crates/energy-dashboard/src/main.rs
// Summary: Demo binary: fetch live data (or fall back to samples) and render chart PNGs.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use energy_api::ApiClient;
use energy_charts::{ChartEngine, Palette, SurfaceMap};
use energy_dashboard::dashboard::{DAILY_CHART, DAILY_HISTORY_CHART, GROUPS_CHART, MONTHLY_CHART};
use energy_dashboard::{export, sample, views, Config, Dashboard, LogNotifier, Notifier, Section};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).with_context(|| format!("failed to load '{path}'"))?,
        None => Config::load_default(),
    };
    let out_dir = config.charts.output_dir.clone();

    let client = ApiClient::with_timeout(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    let notifier = Arc::new(LogNotifier);
    let engine = ChartEngine::new(
        Palette::dark(),
        SurfaceMap::with_pixel_ratio(config.charts.pixel_ratio),
    );
    let mut dashboard = Dashboard::new(client.clone(), engine, notifier);

    // Overview: live data when the backend answers, bundled samples otherwise.
    let overview = match dashboard.load_overview().await {
        Some(data) => data,
        None => {
            tracing::info!("backend unavailable; rendering bundled sample data");
            let data = sample::overview();
            dashboard.render_overview_charts(&data)?;
            data
        }
    };

    println!("== Overview ==");
    println!(
        "Today: {:.2} kWh ({:.2}) / month: {:.2} kWh ({:.2})",
        overview.summary.daily_kwh,
        overview.summary.daily_cost,
        overview.summary.monthly_kwh,
        overview.summary.monthly_cost,
    );
    println!(
        "Current tariff: {} ({} per kWh)",
        overview.tariff.name, overview.tariff.rate_per_kwh
    );
    for row in views::top_consumer_rows(&overview.top) {
        println!(
            "  #{} {} [{}] {:.2} kWh/day ({:.2}/day)",
            row.rank, row.name, row.group, row.daily_kwh, row.daily_cost
        );
    }
    println!(
        "Forecast: {:.2} kWh this month, {:.2} kWh this year",
        overview.forecast.projected_monthly_kwh, overview.forecast.projected_yearly_kwh
    );
    write_chart(&mut dashboard, DAILY_CHART, &out_dir)?;
    write_chart(&mut dashboard, GROUPS_CHART, &out_dir)?;

    // Analytics section.
    dashboard.set_section(Section::Analytics);
    let analytics = match dashboard.load_analytics().await {
        Some(data) => data,
        None => {
            let data = sample::analytics();
            dashboard.render_analytics_charts(&data)?;
            data
        }
    };

    println!("== Analytics ==");
    for card in views::month_cards(&analytics.monthly) {
        println!("  {}: {:.2} kWh ({:.2})", card.title, card.total_kwh, card.total_cost);
    }
    let comparison = views::comparison(&analytics.summary);
    println!(
        "Current month {:.2} kWh, change {}",
        comparison.current_month_kwh, comparison.change_text
    );
    write_chart(&mut dashboard, DAILY_HISTORY_CHART, &out_dir)?;
    write_chart(&mut dashboard, MONTHLY_CHART, &out_dir)?;

    // Recommendations are advisory; a failure only logs.
    match client.recommendations().await {
        Ok(recommendations) => {
            println!("== Recommendations ==");
            for card in views::recommendation_cards(&recommendations) {
                println!("  {} {} - {}", card.icon, card.title, card.message);
            }
        }
        Err(e) => LogNotifier.error(format!("Failed to load recommendations: {e}")),
    }

    // Consumption report, live or sample.
    let today = Utc::now().date_naive();
    match export::export_report(&client, &out_dir, today).await {
        Ok(report) => println!("Exported {} records to {}", report.records, report.path.display()),
        Err(e) => {
            LogNotifier.error(format!("Export failed: {e}"));
            let text = sample::export_csv();
            let path = out_dir.join(format!("energy_report_{}.csv", today.format("%Y-%m-%d")));
            std::fs::create_dir_all(&out_dir)?;
            std::fs::write(&path, text)?;
            println!("Wrote sample report to {}", path.display());
        }
    }

    Ok(())
}

fn write_chart(dashboard: &mut Dashboard, id: &str, out_dir: &Path) -> Result<()> {
    let Some(bytes) = dashboard.engine().surfaces().png_bytes(id) else {
        anyhow::bail!("no pixels rendered for '{id}'");
    };
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{id}.png"));
    std::fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
