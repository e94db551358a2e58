// File: crates/energy-charts/src/bar.rs
// Summary: Bar series rendering: rounded gradient bars with rotated labels.

use skia_safe as skia;

use crate::palette::{with_alpha, Palette};
use crate::scale::Scale;
use crate::text;

pub const CORNER_RADIUS: f32 = 4.0;
/// Fraction of each slot occupied by the bar; the rest is gap.
pub const BAR_FILL: f32 = 0.6;

/// Placement of one bar, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Lay `values` out into side-by-side bars anchored to the baseline, each
/// centered in a `chart_width / n` slot.
pub fn bar_rects(values: &[f64], scale: &Scale) -> Vec<BarRect> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let insets = scale.insets();
    let slot = scale.chart_width / n as f32;
    let width = slot * BAR_FILL;
    let gap = slot * (1.0 - BAR_FILL);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let height = ((v / scale.max_value) as f32) * scale.chart_height;
            BarRect {
                x: insets.left + slot * i as f32 + gap / 2.0,
                y: insets.top + scale.chart_height - height,
                width,
                height,
            }
        })
        .collect()
}

pub(crate) fn draw(
    canvas: &skia::Canvas,
    labels: &[String],
    values: &[f64],
    scale: &Scale,
    colors: Option<&[skia::Color]>,
    palette: &Palette,
    height: f32,
) {
    for (i, rect) in bar_rects(values, scale).iter().enumerate() {
        let color = match colors {
            Some(cs) if !cs.is_empty() => cs[i % cs.len()],
            _ => palette.series_color(i),
        };

        let stops = [color, with_alpha(color, 0x80)];
        let gradient = skia::gradient_shader::linear(
            ((rect.x, rect.y), (rect.x, rect.y + rect.height)),
            skia::gradient_shader::GradientShaderColors::Colors(&stops),
            None,
            skia::TileMode::Clamp,
            None,
            None,
        );
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_shader(gradient);

        let rrect = skia::RRect::new_rect_xy(
            skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height),
            CORNER_RADIUS,
            CORNER_RADIUS,
        );
        canvas.draw_rrect(rrect, &fill);

        if let Some(label) = labels.get(i) {
            text::draw_rotated(
                canvas,
                label,
                rect.x + rect.width / 2.0,
                height - 10.0,
                -45.0,
                text::LABEL_FONT_PX,
                palette.text,
            );
        }
    }
}
