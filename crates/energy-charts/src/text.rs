// File: crates/energy-charts/src/text.rs
// Summary: Label drawing helpers over skia::Font (aligned and rotated variants).

use skia_safe as skia;

pub const AXIS_FONT_PX: f32 = 12.0;
pub const LABEL_FONT_PX: f32 = 11.0;
pub const MESSAGE_FONT_PX: f32 = 14.0;

fn font(size: f32) -> skia::Font {
    let mut f = skia::Font::default();
    f.set_size(size.max(1.0));
    f
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_color(color);
    p
}

/// Draw with the anchor at the left edge of the text.
pub fn draw_left(canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
    canvas.draw_str(text, (x, y), &font(size), &fill(color));
}

/// Draw with the anchor at the right edge of the text.
pub fn draw_right(canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
    let f = font(size);
    let paint = fill(color);
    let (advance, _) = f.measure_str(text, Some(&paint));
    canvas.draw_str(text, (x - advance, y), &f, &paint);
}

/// Draw centered on `x`.
pub fn draw_center(canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
    let f = font(size);
    let paint = fill(color);
    let (advance, _) = f.measure_str(text, Some(&paint));
    canvas.draw_str(text, (x - advance * 0.5, y), &f, &paint);
}

/// Draw centered on the anchor point and rotated `degrees` around it.
pub fn draw_rotated(
    canvas: &skia::Canvas,
    text: &str,
    x: f32,
    y: f32,
    degrees: f32,
    size: f32,
    color: skia::Color,
) {
    let f = font(size);
    let paint = fill(color);
    let (advance, _) = f.measure_str(text, Some(&paint));
    canvas.save();
    canvas.translate((x, y));
    canvas.rotate(degrees, None);
    canvas.draw_str(text, (-advance * 0.5, 0.0), &f, &paint);
    canvas.restore();
}
