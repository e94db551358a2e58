// File: crates/energy-charts/benches/render_bench.rs
// Summary: Criterion bench for series layout and full raster renders.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use energy_charts::bar::bar_rects;
use energy_charts::line::point_positions;
use energy_charts::{BarStyle, CategorySeries, ChartEngine, Insets, LineStyle, Palette, Scale, SurfaceMap};

fn year_series() -> CategorySeries {
    CategorySeries::from_pairs((0..365).map(|i| (format!("d{i}"), ((i as f64) * 0.1).sin().abs() * 12.0)))
}

fn bench_layout(c: &mut Criterion) {
    let series = year_series();
    let scale = Scale::fit(series.values(), 800.0, 400.0, Insets::plot());
    c.bench_function("line_layout_365", |b| {
        b.iter(|| point_positions(black_box(series.values()), &scale))
    });
    let bar_scale = Scale::fit(series.values(), 800.0, 400.0, Insets::bars());
    c.bench_function("bar_layout_365", |b| {
        b.iter(|| bar_rects(black_box(series.values()), &bar_scale))
    });
}

fn bench_render(c: &mut Criterion) {
    let series = year_series();
    let mut engine = ChartEngine::new(Palette::dark(), SurfaceMap::new());
    engine.surfaces().insert("bench", 800.0, 400.0);

    c.bench_function("line_render_365", |b| {
        b.iter(|| engine.line("bench", black_box(&series), &LineStyle::default()))
    });
    c.bench_function("bar_render_365", |b| {
        b.iter(|| engine.bar("bench", black_box(&series), &BarStyle::default()))
    });
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
