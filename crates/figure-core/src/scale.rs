// File: crates/figure-core/src/scale.rs
// Summary: Linear value-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;

/// Maps a value range onto a pixel range. For the Y axis the pixel range is
/// given bottom-first so larger values land higher on the canvas.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    vmin: f64,
    span: f64,
    px0: f32,
    px1: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px0: f32, px1: f32) -> Self {
        // degenerate or inverted value ranges clamp to a unit span
        let span = if (vmax - vmin) > 1e-12 { vmax - vmin } else { 1.0 };
        Self { vmin, span, px0, px1 }
    }

    /// Scale across the plot, left edge to right edge.
    pub fn across(axis: &Axis, left: f32, right: f32) -> Self {
        Self::new(axis.min, axis.max, left, right)
    }

    /// Scale down the plot with inverted pixels: `axis.min` at `bottom`.
    pub fn down(axis: &Axis, top: f32, bottom: f32) -> Self {
        Self::new(axis.min, axis.max, bottom, top)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.px0 + (((v - self.vmin) / self.span) as f32) * (self.px1 - self.px0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.vmin + f64::from((px - self.px0) / (self.px1 - self.px0)) * self.span
    }
}
