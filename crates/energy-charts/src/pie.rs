// File: crates/energy-charts/src/pie.rs
// Summary: Donut chart rendering: wedges, hole, side legend, empty-data message.

use skia_safe as skia;

use crate::palette::Palette;
use crate::text;

/// Inner radius as a fraction of the outer radius.
pub const DONUT_HOLE: f32 = 0.5;
pub const LEGEND_ROW_PX: f32 = 20.0;
pub const LEGEND_SWATCH_PX: f32 = 12.0;
/// Legend column offset from the right edge.
pub const LEGEND_WIDTH_PX: f32 = 100.0;

pub const NO_DATA_MESSAGE: &str = "No data";

/// One donut segment. Angles are in degrees; 0 points right, negative is up.
#[derive(Clone, Copy, Debug)]
pub struct Wedge {
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub color: skia::Color,
}

/// One legend row: swatch color plus category label.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub label: String,
    pub color: skia::Color,
}

/// Wedges for `values` in input order, starting at 12 o'clock.
///
/// A zero total yields no wedges at all; callers render the no-data
/// placeholder instead of dividing by the sum.
pub fn wedges(values: &[f64], colors: &[Option<skia::Color>], palette: &Palette) -> Vec<Wedge> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return Vec::new();
    }
    let mut start = -90.0_f32;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let sweep = ((v / total) * 360.0) as f32;
            let wedge = Wedge {
                start_deg: start,
                sweep_deg: sweep,
                color: segment_color(colors, palette, i),
            };
            start += sweep;
            wedge
        })
        .collect()
}

/// One legend row per category whose value is strictly above zero, in
/// input order.
pub fn legend_rows(
    labels: &[String],
    values: &[f64],
    colors: &[Option<skia::Color>],
    palette: &Palette,
) -> Vec<LegendRow> {
    labels
        .iter()
        .zip(values)
        .enumerate()
        .filter(|(_, (_, &value))| value > 0.0)
        .map(|(i, (label, _))| LegendRow {
            label: label.clone(),
            color: segment_color(colors, palette, i),
        })
        .collect()
}

fn segment_color(colors: &[Option<skia::Color>], palette: &Palette, i: usize) -> skia::Color {
    colors
        .get(i)
        .copied()
        .flatten()
        .unwrap_or_else(|| palette.series_color(i))
}

pub(crate) fn draw(
    canvas: &skia::Canvas,
    labels: &[String],
    values: &[f64],
    colors: &[Option<skia::Color>],
    palette: &Palette,
    width: f32,
    height: f32,
) {
    let ws = wedges(values, colors, palette);
    if ws.is_empty() {
        text::draw_center(
            canvas,
            NO_DATA_MESSAGE,
            width / 2.0,
            height / 2.0,
            text::MESSAGE_FONT_PX,
            palette.text,
        );
        return;
    }

    let cx = width / 2.0 - 60.0;
    let cy = height / 2.0;
    let radius = cx.min(cy) - 10.0;
    let bounds = skia::Rect::from_xywh(cx - radius, cy - radius, radius * 2.0, radius * 2.0);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    for wedge in &ws {
        fill.set_color(wedge.color);
        if wedge.sweep_deg >= 360.0 {
            // a full-circle arc collapses to nothing in Skia
            canvas.draw_circle((cx, cy), radius, &fill);
            continue;
        }
        let mut path = skia::Path::new();
        path.move_to((cx, cy));
        path.arc_to(bounds, wedge.start_deg, wedge.sweep_deg, false);
        path.close();
        canvas.draw_path(&path, &fill);
    }

    // hole punched with the background color turns the pie into a donut
    fill.set_color(palette.background);
    canvas.draw_circle((cx, cy), radius * DONUT_HOLE, &fill);

    let legend_x = width - LEGEND_WIDTH_PX;
    let mut legend_y = 20.0;
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    for row in legend_rows(labels, values, colors, palette) {
        swatch.set_color(row.color);
        canvas.draw_rect(
            skia::Rect::from_xywh(legend_x, legend_y, LEGEND_SWATCH_PX, LEGEND_SWATCH_PX),
            &swatch,
        );
        text::draw_left(
            canvas,
            &row.label,
            legend_x + 18.0,
            legend_y + 10.0,
            text::LABEL_FONT_PX,
            palette.text,
        );
        legend_y += LEGEND_ROW_PX;
    }
}
