// File: crates/energy-charts/src/surface.rs
// Summary: Surface registry; resolves ids to DPR-scaled Skia raster buffers.

use std::collections::HashMap;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::types::{HEIGHT, WIDTH};

/// One registered drawing surface: a displayed (logical) size plus the
/// raster buffer left behind by the most recent render.
struct Entry {
    width: f32,
    height: f32,
    raster: Option<skia::Surface>,
}

/// Registry of named drawing surfaces.
///
/// The application layer registers each surface under an id with its
/// displayed size. Renderers resolve ids on every call; the backing buffer
/// is sized `logical x pixel_ratio` and a uniform scale transform keeps all
/// drawing in logical units. Unknown ids resolve to `None` and render calls
/// treat that as a no-op, so hidden sections can share render code freely.
pub struct SurfaceMap {
    entries: HashMap<String, Entry>,
    pixel_ratio: f32,
}

impl SurfaceMap {
    pub fn new() -> Self {
        Self::with_pixel_ratio(1.0)
    }

    pub fn with_pixel_ratio(pixel_ratio: f32) -> Self {
        Self {
            entries: HashMap::new(),
            pixel_ratio: pixel_ratio.max(0.1),
        }
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Register `id`, or update its displayed size.
    pub fn insert(&mut self, id: impl Into<String>, width: f32, height: f32) {
        self.entries.insert(
            id.into(),
            Entry {
                width,
                height,
                raster: None,
            },
        );
    }

    /// Register `id` at the default surface size.
    pub fn insert_default(&mut self, id: impl Into<String>) {
        self.insert(id, WIDTH, HEIGHT);
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Resolve `id` to a fresh raster buffer. The buffer is recreated on
    /// every resolve, sized for the pixel ratio and cleared to transparent.
    pub(crate) fn resolve(&mut self, id: &str) -> Result<Option<Resolved<'_>>> {
        let Some(entry) = self.entries.get_mut(id) else {
            return Ok(None);
        };
        let pw = (entry.width * self.pixel_ratio).round().max(1.0) as i32;
        let ph = (entry.height * self.pixel_ratio).round().max(1.0) as i32;
        let mut raster = skia::surfaces::raster_n32_premul((pw, ph))
            .ok_or(ChartError::Surface {
                width: pw,
                height: ph,
            })?;
        let canvas = raster.canvas();
        canvas.scale((self.pixel_ratio, self.pixel_ratio));
        canvas.clear(skia::Color::TRANSPARENT);
        let surface = entry.raster.insert(raster);
        Ok(Some(Resolved {
            width: entry.width,
            height: entry.height,
            surface,
        }))
    }

    /// Pixels of the most recent render on `id`, encoded as PNG bytes.
    pub fn png_bytes(&mut self, id: &str) -> Option<Vec<u8>> {
        let raster = self.entries.get_mut(id)?.raster.as_mut()?;
        let image = raster.image_snapshot();
        #[allow(deprecated)]
        let data = image.encode_to_data(skia::EncodedImageFormat::PNG)?;
        Some(data.as_bytes().to_vec())
    }

    /// Pixels of the most recent render on `id` as straight RGBA8, with the
    /// physical buffer dimensions.
    pub fn rgba8(&mut self, id: &str) -> Option<(Vec<u8>, i32, i32)> {
        let raster = self.entries.get_mut(id)?.raster.as_mut()?;
        let (w, h) = (raster.width(), raster.height());
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; (w * h * 4) as usize];
        let ok = raster.read_pixels(&info, &mut pixels, (w * 4) as usize, (0, 0));
        ok.then_some((pixels, w, h))
    }
}

impl Default for SurfaceMap {
    fn default() -> Self {
        Self::new()
    }
}

/// A surface resolved for one render pass, in logical units.
pub(crate) struct Resolved<'a> {
    pub width: f32,
    pub height: f32,
    pub surface: &'a mut skia::Surface,
}
