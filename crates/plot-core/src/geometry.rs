// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    /// Smallest rect covering both `self` and the pixel at `(x, y)`.
    pub fn include(&self, x: i32, y: i32) -> Self {
        Self::from_ltrb(self.left.min(x), self.top.min(y), self.right.max(x + 1), self.bottom.max(y + 1))
    }
    /// Grow every edge outward by `pad` pixels.
    pub const fn inflate(&self, pad: i32) -> Self {
        Self::from_ltrb(self.left - pad, self.top - pad, self.right + pad, self.bottom + pad)
    }
}
