// File: crates/energy-charts/src/types.rs
// Summary: Shared types and constants (sizes, insets, grid defaults).

/// Default logical surface width, in CSS pixels.
pub const WIDTH: f32 = 800.0;
/// Default logical surface height, in CSS pixels.
pub const HEIGHT: f32 = 400.0;

/// Horizontal grid row count (`GRID_LINES + 1` lines are drawn).
pub const GRID_LINES: usize = 5;

/// Chart-area margins, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Margins for line and pie charts.
    pub const fn plot() -> Self {
        Self::new(20.0, 20.0, 40.0, 60.0)
    }

    /// Bar charts keep extra room at the bottom for rotated labels.
    pub const fn bars() -> Self {
        Self::new(20.0, 20.0, 60.0, 60.0)
    }
}
