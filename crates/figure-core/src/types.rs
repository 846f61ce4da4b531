// File: crates/figure-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings).

use skia_safe as skia;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1280;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 960;

/// RGBA color usable by both the Skia and SVG backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }

    /// CSS hex triplet, alpha excluded (SVG carries opacity separately).
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 opacity for SVG attributes.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> i32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> i32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // Bottom leaves room for tick labels, the axis label, and the legend row.
        Self::new(72, 32, 24, 96)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_hex_is_lowercase_rgb() {
        assert_eq!(Rgba::rgb(0x00, 0x66, 0xCC).css(), "#0066cc");
        assert_eq!(Rgba::rgba(0xFF, 0xCC, 0xCC, 178).css(), "#ffcccc");
    }

    #[test]
    fn opacity_scales_alpha() {
        assert!((Rgba::rgb(1, 2, 3).opacity() - 1.0).abs() < 1e-6);
        assert!((Rgba::rgba(0, 0, 0, 0).opacity()).abs() < 1e-6);
    }

    #[test]
    fn inset_sums() {
        let i = Insets::new(10, 20, 30, 40);
        assert_eq!(i.hsum(), 30);
        assert_eq!(i.vsum(), 70);
    }
}
