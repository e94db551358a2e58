// File: crates/energy-charts/src/engine.rs
// Summary: Chart engine facade: resolve surface, compute scale, draw grid and series.

use skia_safe as skia;

use crate::bar;
use crate::error::Result;
use crate::grid;
use crate::line;
use crate::palette::Palette;
use crate::pie;
use crate::scale::Scale;
use crate::series::{CategorySeries, ChartKind};
use crate::surface::SurfaceMap;
use crate::text;
use crate::types::{Insets, GRID_LINES};

/// Per-render styling for line charts.
#[derive(Clone, Debug, Default)]
pub struct LineStyle {
    /// Stroke, fill and marker color; the palette primary when absent.
    pub color: Option<skia::Color>,
}

/// Per-render styling for bar charts.
#[derive(Clone, Debug, Default)]
pub struct BarStyle {
    /// Per-bar colors cycled by index; the shared series cycle when absent.
    pub colors: Option<Vec<skia::Color>>,
}

/// A fully described chart, for callers that dispatch on [`ChartKind`].
#[derive(Clone, Debug)]
pub enum ChartSpec {
    Line {
        series: CategorySeries,
        style: LineStyle,
    },
    Bar {
        series: CategorySeries,
        style: BarStyle,
    },
    Pie {
        series: CategorySeries,
        colors: Vec<Option<skia::Color>>,
    },
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Line { .. } => ChartKind::Line,
            ChartSpec::Bar { .. } => ChartKind::Bar,
            ChartSpec::Pie { .. } => ChartKind::Pie,
        }
    }
}

/// The rendering entry point: an injected palette plus the surface registry.
///
/// Every render call resolves its surface afresh, recomputes the scale from
/// the supplied values and redraws from scratch; nothing is cached between
/// calls. Rendering to an unregistered surface id is a silent no-op.
pub struct ChartEngine {
    palette: Palette,
    surfaces: SurfaceMap,
}

impl ChartEngine {
    pub fn new(palette: Palette, surfaces: SurfaceMap) -> Self {
        Self { palette, surfaces }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn surfaces(&mut self) -> &mut SurfaceMap {
        &mut self.surfaces
    }

    /// Render `spec` onto `surface_id`, dispatching on the chart kind.
    pub fn render(&mut self, surface_id: &str, spec: &ChartSpec) -> Result<()> {
        match spec {
            ChartSpec::Line { series, style } => self.line(surface_id, series, style),
            ChartSpec::Bar { series, style } => self.bar(surface_id, series, style),
            ChartSpec::Pie { series, colors } => self.pie(surface_id, series, colors),
        }
    }

    /// Line chart: grid and axis labels, stroked series with an area fill
    /// and point markers.
    pub fn line(
        &mut self,
        surface_id: &str,
        series: &CategorySeries,
        style: &LineStyle,
    ) -> Result<()> {
        let Some(resolved) = self.surfaces.resolve(surface_id)? else {
            return Ok(());
        };
        let (width, height) = (resolved.width, resolved.height);
        let canvas = resolved.surface.canvas();

        let scale = Scale::fit(series.values(), width, height, Insets::plot());
        let color = style.color.unwrap_or(self.palette.primary);

        draw_grid(canvas, &scale, &self.palette, width);
        line::draw(
            canvas,
            series.labels(),
            series.values(),
            &scale,
            color,
            &self.palette,
            height,
        );
        Ok(())
    }

    /// Bar chart: grid and axis labels, gradient bars with rotated
    /// category labels.
    pub fn bar(
        &mut self,
        surface_id: &str,
        series: &CategorySeries,
        style: &BarStyle,
    ) -> Result<()> {
        let Some(resolved) = self.surfaces.resolve(surface_id)? else {
            return Ok(());
        };
        let (width, height) = (resolved.width, resolved.height);
        let canvas = resolved.surface.canvas();

        let scale = Scale::fit(series.values(), width, height, Insets::bars());

        draw_grid(canvas, &scale, &self.palette, width);
        bar::draw(
            canvas,
            series.labels(),
            series.values(),
            &scale,
            style.colors.as_deref(),
            &self.palette,
            height,
        );
        Ok(())
    }

    /// Donut chart with a side legend. `colors` supplies per-segment
    /// overrides; absent entries fall back to the series cycle.
    pub fn pie(
        &mut self,
        surface_id: &str,
        series: &CategorySeries,
        colors: &[Option<skia::Color>],
    ) -> Result<()> {
        let Some(resolved) = self.surfaces.resolve(surface_id)? else {
            return Ok(());
        };
        let (width, height) = (resolved.width, resolved.height);
        let canvas = resolved.surface.canvas();

        pie::draw(
            canvas,
            series.labels(),
            series.values(),
            colors,
            &self.palette,
            width,
            height,
        );
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, scale: &Scale, palette: &Palette, width: f32) {
    let insets = scale.insets();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(palette.grid);

    for (i, value) in grid::row_values(scale.max_value, GRID_LINES)
        .into_iter()
        .enumerate()
    {
        let y = insets.top + (scale.chart_height / GRID_LINES as f32) * i as f32;
        canvas.draw_line((insets.left, y), (width - insets.right, y), &stroke);
        text::draw_right(
            canvas,
            &format!("{value:.1}"),
            insets.left - 10.0,
            y + 4.0,
            text::AXIS_FONT_PX,
            palette.text,
        );
    }
}
