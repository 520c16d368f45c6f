//! Integer bounds rectangles.

use core::fmt;

/// Axis-aligned integer rectangle, half-open on the max edges.
///
/// A point `(x, y)` is inside when `min_x <= x < max_x` and
/// `min_y <= y < max_y`. The rectangle is not normalized: a rectangle
/// whose max is below its min has a negative extent, which rasters
/// reject at construction.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub min_x: i32,
    /// Top edge (inclusive).
    pub min_y: i32,
    /// Right edge (exclusive).
    pub max_x: i32,
    /// Bottom edge (exclusive).
    pub max_y: i32,
}

impl Rect {
    /// Create a rectangle from its corners.
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Rectangle anchored at the origin, `(0, 0)-(width, height)`.
    ///
    /// Sizes are `i32` like the coordinates; a negative size gives a
    /// negative extent, which rasters reject.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Signed horizontal extent, `max_x - min_x`.
    #[inline]
    pub const fn dx(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64
    }

    /// Signed vertical extent, `max_y - min_y`.
    #[inline]
    pub const fn dy(&self) -> i64 {
        self.max_y as i64 - self.min_y as i64
    }

    /// True if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.dx() <= 0 || self.dy() <= 0
    }

    /// Whether `(x, y)` lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
