// File: crates/figure-core/src/series.rs
// Summary: Series model for line and baseline-area data.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    /// Filled region between the data and `baseline`, no stroke.
    Area,
}

/// Two-stop vertical gradient for area fills (stops at 5% and 95%).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub top: Rgba,
    pub bottom: Rgba,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub data_xy: Vec<(f64, f64)>,
    pub color: Rgba,
    pub stroke_width: f32,
    /// Fill origin for `Area` series.
    pub baseline: f64,
    /// Area fill gradient; a flat `color` fill when unset.
    pub gradient: Option<Gradient>,
}

impl Series {
    pub fn line(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            kind: SeriesKind::Line,
            data_xy: data,
            color: Rgba::rgb(64, 160, 255),
            stroke_width: 2.0,
            baseline: 0.0,
            gradient: None,
        }
    }

    pub fn area(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { kind: SeriesKind::Area, ..Self::line(name, data) }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose() {
        let s = Series::area("Zone", vec![(0.0, 0.0), (1.0, -1.0)])
            .with_baseline(0.0)
            .with_gradient(Gradient { top: Rgba::rgb(255, 204, 204), bottom: Rgba::rgb(255, 153, 153) })
            .with_stroke_width(0.0);
        assert_eq!(s.kind, SeriesKind::Area);
        assert_eq!(s.baseline, 0.0);
        assert!(s.gradient.is_some());
        assert_eq!(s.name, "Zone");
    }
}
