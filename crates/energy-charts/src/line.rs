// File: crates/energy-charts/src/line.rs
// Summary: Line series rendering: stroke, gradient area fill, point markers.

use skia_safe as skia;

use crate::grid;
use crate::palette::{with_alpha, Palette};
use crate::scale::Scale;
use crate::text;

pub const STROKE_PX: f32 = 3.0;
pub const MARKER_RADIUS: f32 = 4.0;
pub const MARKER_OUTLINE_PX: f32 = 2.0;

/// Screen x for position `i` of `n`, evenly spaced across the chart width.
/// A single position sits centered rather than dividing by zero.
pub fn x_at(i: usize, n: usize, scale: &Scale) -> f32 {
    let insets = scale.insets();
    if n <= 1 {
        insets.left + scale.chart_width / 2.0
    } else {
        insets.left + (scale.chart_width / (n as f32 - 1.0)) * i as f32
    }
}

/// Screen positions for `values`, first to last.
pub fn point_positions(values: &[f64], scale: &Scale) -> Vec<(f32, f32)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (x_at(i, values.len(), scale), scale.y_at(v)))
        .collect()
}

pub(crate) fn draw(
    canvas: &skia::Canvas,
    labels: &[String],
    values: &[f64],
    scale: &Scale,
    color: skia::Color,
    palette: &Palette,
    height: f32,
) {
    let insets = scale.insets();

    // thinned, unrotated category labels along the bottom edge
    let step = grid::label_step(labels.len());
    for (i, label) in labels.iter().enumerate() {
        if i % step == 0 {
            text::draw_center(
                canvas,
                label,
                x_at(i, labels.len(), scale),
                height - 10.0,
                text::AXIS_FONT_PX,
                palette.text,
            );
        }
    }

    let points = point_positions(values, scale);
    if points.is_empty() {
        return;
    }

    if points.len() > 1 {
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(STROKE_PX);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);

        // close the stroked path down to the baseline for the area fill
        let mut area = path;
        area.line_to((insets.left + scale.chart_width, scale.baseline()));
        area.line_to((insets.left, scale.baseline()));
        area.close();

        let stops = [with_alpha(color, 0x40), with_alpha(color, 0x00)];
        let gradient = skia::gradient_shader::linear(
            ((0.0, insets.top), (0.0, scale.baseline())),
            skia::gradient_shader::GradientShaderColors::Colors(&stops),
            None,
            skia::TileMode::Clamp,
            None,
            None,
        );
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_shader(gradient);
        canvas.draw_path(&area, &fill);
    }

    // markers last, so they sit on top of the fill
    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_color(color);
    let mut outline = skia::Paint::default();
    outline.set_anti_alias(true);
    outline.set_style(skia::paint::Style::Stroke);
    outline.set_stroke_width(MARKER_OUTLINE_PX);
    outline.set_color(palette.background);
    for &(x, y) in &points {
        canvas.draw_circle((x, y), MARKER_RADIUS, &marker);
        canvas.draw_circle((x, y), MARKER_RADIUS, &outline);
    }
}
