// File: crates/energy-charts/src/palette.rs
// Summary: Chart chrome colors and the cyclic series palette.

use skia_safe as skia;

/// Colors used by every renderer: chrome (text, grid, background) plus the
/// series cycle applied when callers do not supply their own colors.
///
/// A `Palette` is constructed by the caller and handed to the engine; there
/// is no process-wide color state.
#[derive(Clone, Debug)]
pub struct Palette {
    pub primary: skia::Color,
    pub secondary: skia::Color,
    pub accent: skia::Color,
    pub success: skia::Color,
    pub danger: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    pub background: skia::Color,
    pub series: Vec<skia::Color>,
}

impl Palette {
    /// Dark dashboard palette.
    pub fn dark() -> Self {
        Self {
            primary: rgb(0x0e, 0xa5, 0xe9),
            secondary: rgb(0x63, 0x66, 0xf1),
            accent: rgb(0xf5, 0x9e, 0x0b),
            success: rgb(0x10, 0xb9, 0x81),
            danger: rgb(0xef, 0x44, 0x44),
            text: rgb(0x94, 0xa3, 0xb8),
            grid: rgb(0x33, 0x41, 0x55),
            background: rgb(0x1e, 0x29, 0x3b),
            series: vec![
                rgb(0xe7, 0x4c, 0x3c),
                rgb(0x34, 0x98, 0xdb),
                rgb(0x9b, 0x59, 0xb6),
                rgb(0x1a, 0xbc, 0x9c),
                rgb(0xf1, 0xc4, 0x0f),
                rgb(0xe6, 0x7e, 0x22),
                rgb(0x2e, 0xcc, 0x71),
                rgb(0x34, 0x49, 0x5e),
                rgb(0x16, 0xa0, 0x85),
                rgb(0xc0, 0x39, 0x2b),
            ],
        }
    }

    /// Series color for position `i`, cycling through the palette.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.series[i % self.series.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::from_argb(255, r, g, b)
}

/// Parse a `#rrggbb` (or shorthand `#rgb`) color, as configured group
/// colors arrive off the wire.
pub fn parse_hex(s: &str) -> Option<skia::Color> {
    let hex = s.strip_prefix('#')?;
    let v = match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok()?,
        3 => {
            let short = u32::from_str_radix(hex, 16).ok()?;
            let (r, g, b) = (short >> 8 & 0xf, short >> 4 & 0xf, short & 0xf);
            (r << 20 | r << 16) | (g << 12 | g << 8) | (b << 4 | b)
        }
        _ => return None,
    };
    Some(skia::Color::from_argb(
        255,
        (v >> 16) as u8,
        (v >> 8) as u8,
        v as u8,
    ))
}

/// Copy of `color` with its alpha channel replaced.
pub fn with_alpha(color: skia::Color, alpha: u8) -> skia::Color {
    skia::Color::from_argb(alpha, color.r(), color.g(), color.b())
}
