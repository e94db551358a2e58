// File: crates/energy-charts/src/error.rs
// Summary: Engine error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("labels/values length mismatch: {labels} labels vs {values} values")]
    LengthMismatch { labels: usize, values: usize },
    #[error("failed to allocate a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
}
