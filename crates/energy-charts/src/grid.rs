// File: crates/energy-charts/src/grid.rs
// Summary: Grid row values and x-label thinning.

/// Values labeled on each horizontal grid line, top row first.
pub fn row_values(max_value: f64, rows: usize) -> Vec<f64> {
    (0..=rows)
        .map(|i| max_value - (max_value / rows as f64) * i as f64)
        .collect()
}

/// Stride between drawn category labels; roughly seven fit across a chart.
pub fn label_step(count: usize) -> usize {
    usize::max(1, count.div_ceil(7))
}
