// File: crates/figure-core/src/annotate.rs
// Summary: Reference lines and fixed text annotations drawn over the plot.

use crate::types::Rgba;

/// Where a reference line sits in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RefValue {
    /// Horizontal line at this Y value.
    Horizontal(f64),
    /// Vertical line at this X value.
    Vertical(f64),
}

/// Label placement relative to the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPos {
    /// Just outside the right edge of the plot, at the line's height.
    Right,
    /// Centered above the top of the line.
    Top,
}

#[derive(Clone, Debug)]
pub struct RefLine {
    pub at: RefValue,
    pub label: String,
    pub label_pos: LabelPos,
    pub color: Rgba,
    pub stroke_width: f32,
    /// On/off dash intervals in pixels; solid when unset.
    pub dash: Option<[f32; 2]>,
}

impl RefLine {
    pub fn horizontal(y: f64, label: impl Into<String>) -> Self {
        Self {
            at: RefValue::Horizontal(y),
            label: label.into(),
            label_pos: LabelPos::Right,
            color: Rgba::rgb(102, 102, 102),
            stroke_width: 1.0,
            dash: None,
        }
    }

    pub fn vertical(x: f64, label: impl Into<String>) -> Self {
        Self {
            at: RefValue::Vertical(x),
            label: label.into(),
            label_pos: LabelPos::Top,
            color: Rgba::rgb(102, 102, 102),
            stroke_width: 1.0,
            dash: None,
        }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_dash(mut self, on: f32, off: f32) -> Self {
        self.dash = Some([on, off]);
        self
    }
}

/// Static multi-line text block positioned by fractions of the chart viewport.
/// The first line is drawn emphasized, the rest in a smaller regular face.
#[derive(Clone, Debug)]
pub struct TextAnnotation {
    pub fx: f32,
    pub fy: f32,
    pub lines: Vec<String>,
    pub color: Rgba,
}

impl TextAnnotation {
    pub fn new(fx: f32, fy: f32, color: Rgba) -> Self {
        Self { fx, fy, lines: Vec::new(), color }
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_line_builders() {
        let l = RefLine::horizontal(50.0, "50% Parity")
            .with_color(Rgba::rgb(153, 153, 153))
            .with_dash(3.0, 3.0);
        assert_eq!(l.at, RefValue::Horizontal(50.0));
        assert_eq!(l.label_pos, LabelPos::Right);
        assert_eq!(l.dash, Some([3.0, 3.0]));

        let v = RefLine::vertical(22.8, "Crossover: $22.8k").with_stroke_width(4.0);
        assert_eq!(v.label_pos, LabelPos::Top);
        assert_eq!(v.stroke_width, 4.0);
    }

    #[test]
    fn annotation_lines_accumulate() {
        let a = TextAnnotation::new(0.03, 0.28, Rgba::rgb(0, 102, 204))
            .line("At GDP=0:")
            .line("Complainant")
            .line("+17.3pp");
        assert_eq!(a.lines.len(), 3);
        assert_eq!(a.lines[0], "At GDP=0:");
    }
}
