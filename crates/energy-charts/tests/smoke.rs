// File: crates/energy-charts/tests/smoke.rs
// Purpose: End-to-end raster smoke tests: PNG output, DPR scaling, pixel checks.

use energy_charts::{
    BarStyle, CategorySeries, ChartEngine, ChartKind, ChartSpec, LineStyle, Palette, SurfaceMap,
};

fn engine_with(id: &str, pixel_ratio: f32) -> ChartEngine {
    let mut surfaces = SurfaceMap::with_pixel_ratio(pixel_ratio);
    surfaces.insert(id, 800.0, 400.0);
    ChartEngine::new(Palette::dark(), surfaces)
}

fn week_series() -> CategorySeries {
    CategorySeries::from_pairs([
        ("Mon", 4.2),
        ("Tue", 5.1),
        ("Wed", 3.8),
        ("Thu", 6.0),
        ("Fri", 5.5),
        ("Sat", 7.2),
        ("Sun", 6.4),
    ])
}

#[test]
fn line_render_produces_a_png_at_device_resolution() {
    let mut engine = engine_with("consumption-chart", 2.0);
    engine
        .line("consumption-chart", &week_series(), &LineStyle::default())
        .expect("render should succeed");

    let bytes = engine
        .surfaces()
        .png_bytes("consumption-chart")
        .expect("pixels after render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    // backing buffer is logical size x pixel ratio
    assert_eq!(img.width(), 1600);
    assert_eq!(img.height(), 800);
}

#[test]
fn bar_render_succeeds_on_registered_surface() {
    let mut engine = engine_with("monthly-chart", 1.0);
    engine
        .bar("monthly-chart", &week_series(), &BarStyle::default())
        .expect("render should succeed");
    assert!(engine.surfaces().png_bytes("monthly-chart").is_some());
}

#[test]
fn unknown_surface_is_a_silent_no_op() {
    let mut engine = engine_with("visible", 1.0);
    engine
        .line("hidden-section", &week_series(), &LineStyle::default())
        .expect("missing surface must not error");
    assert!(engine.surfaces().png_bytes("hidden-section").is_none());
}

#[test]
fn pie_wedge_hole_and_legend_pixels() {
    let mut engine = engine_with("groups-chart", 1.0);
    let series = CategorySeries::from_pairs([("heating", 5.0)]);
    engine
        .pie("groups-chart", &series, &[])
        .expect("render should succeed");

    let (pixels, w, _h) = engine.surfaces().rgba8("groups-chart").expect("pixels");
    let px = |x: i32, y: i32| {
        let i = ((y * w + x) * 4) as usize;
        (pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3])
    };

    // chart center is (width/2 - 60, height/2); radius min(cx, cy) - 10
    // (340, 60) lies inside the single wedge, between hole and rim
    assert_eq!(px(340, 60), (0xe7, 0x4c, 0x3c, 255));
    // the donut hole is filled with the background color
    assert_eq!(px(340, 200), (0x1e, 0x29, 0x3b, 255));
    // legend swatch for the only category, top-right column
    assert_eq!(px(705, 25), (0xe7, 0x4c, 0x3c, 255));
}

#[test]
fn zero_sum_pie_renders_no_wedge_pixels() {
    let mut engine = engine_with("groups-chart", 1.0);
    let series = CategorySeries::from_pairs([("a", 0.0), ("b", 0.0)]);
    engine
        .pie("groups-chart", &series, &[])
        .expect("render should succeed");

    let (pixels, w, _h) = engine.surfaces().rgba8("groups-chart").expect("pixels");
    // where the first wedge would have been there is only transparency
    let i = ((60 * w + 340) * 4) as usize;
    assert_eq!(pixels[i + 3], 0, "no wedge may be drawn for zero data");
}

#[test]
fn chart_spec_dispatch_reaches_the_right_renderer() {
    let mut engine = engine_with("groups-chart", 1.0);
    let spec = ChartSpec::Pie {
        series: CategorySeries::from_pairs([("heating", 5.0)]),
        colors: Vec::new(),
    };
    assert_eq!(spec.kind(), ChartKind::Pie);
    engine.render("groups-chart", &spec).expect("dispatch render");

    let (pixels, w, _h) = engine.surfaces().rgba8("groups-chart").expect("pixels");
    let i = ((60 * w + 340) * 4) as usize;
    // same wedge pixel the direct pie call produces
    assert_eq!(pixels[i..i + 3], [0xe7, 0x4c, 0x3c]);
}

#[test]
fn rerender_overwrites_the_previous_frame() {
    let mut engine = engine_with("consumption-chart", 1.0);
    engine
        .line("consumption-chart", &week_series(), &LineStyle::default())
        .expect("first render");
    let first = engine.surfaces().png_bytes("consumption-chart").unwrap();

    let flat = CategorySeries::from_pairs([("Mon", 0.0), ("Tue", 0.0)]);
    engine
        .line("consumption-chart", &flat, &LineStyle::default())
        .expect("second render");
    let second = engine.surfaces().png_bytes("consumption-chart").unwrap();

    assert_ne!(first, second, "each render redraws from scratch");
}
