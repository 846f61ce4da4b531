// File: crates/figure-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod annotate;
pub mod axis;
pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use annotate::{LabelPos, RefLine, RefValue, TextAnnotation};
pub use axis::Axis;
pub use chart::{Chart, Footnote, RenderOptions};
pub use error::RenderError;
pub use scale::LinearScale;
pub use series::{Gradient, Series, SeriesKind};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{Insets, Rgba};
