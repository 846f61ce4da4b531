// File: crates/figure-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick positions from `min` to `max` at a fixed `step`, endpoints inclusive.
/// A half-step tolerance absorbs floating point drift at the top end.
pub fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max < min {
        return vec![min, max];
    }
    let mut out = Vec::new();
    let mut v = min;
    while v <= max + step * 0.5 {
        out.push(v.min(max));
        v += step;
    }
    out
}
