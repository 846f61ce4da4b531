// File: crates/figure-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF32 {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF32 {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// Shrink by per-side insets.
    pub fn inset(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::from_ltrb(self.left + left, self.top + top, self.right - right, self.bottom - bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_and_center() {
        let r = RectF32::from_ltrb(10.0, 20.0, 110.0, 220.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 200.0);
        assert_eq!(r.center_x(), 60.0);
        assert_eq!(r.center_y(), 120.0);
    }

    #[test]
    fn inset_shrinks_all_sides() {
        let r = RectF32::from_ltrb(0.0, 0.0, 100.0, 100.0).inset(5.0, 10.0, 15.0, 20.0);
        assert_eq!(r, RectF32::from_ltrb(5.0, 10.0, 85.0, 80.0));
    }
}
