//! Axis-aligned rectangles and overlap tests
//!
//! Coordinates are integer pixels with the origin at the top-left of the
//! playfield and y growing downward. Edges are half-open: a rect covers
//! `[x, x + w)` horizontally and `[y, y + h)` vertically, so two rects that
//! only share an edge do not overlap.

use glam::IVec2;

/// An integer axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Square of the given side with its top-left corner at (x, y)
    pub const fn square(x: i32, y: i32, side: i32) -> Self {
        Self::new(x, y, side, side)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// A rect with no width or height covers nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// True if the two rects share a region of non-zero area
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
