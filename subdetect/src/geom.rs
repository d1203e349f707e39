//! Geometry primitives shared by the detection passes.

use std::cmp::{max, min};

/// A pixel location in frame coordinates.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

/// A width and height pair, in pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Create a size from a width and a height.
    pub fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }
}

/// An axis-aligned rectangle with integer coordinates.
///
/// The `right` and `bottom` edges are exclusive, so a rectangle covers the
/// half-open ranges `left..right` and `top..bottom`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl Rect {
    /// Create a rectangle by specifying the left, top, width and height
    /// values.  Panics if the width or height is negative, which is a
    /// programming error at the call site.
    pub fn ltwh(l: i32, t: i32, w: i32, h: i32) -> Rect {
        assert!(w >= 0, "rectangle has negative width");
        assert!(h >= 0, "rectangle has negative height");
        Rect {
            left: l,
            top: t,
            width: w,
            height: h,
        }
    }

    /// Create a rectangle from left and top (inclusive) and right and
    /// bottom (exclusive) coordinates.  Panics if the rectangle has
    /// negative width or height.
    pub fn ltrb(l: i32, t: i32, r: i32, b: i32) -> Rect {
        Rect::ltwh(l, t, r - l, b - t)
    }

    /// The left-most edge of the rectangle (inclusive).
    pub fn left(&self) -> i32 {
        self.left
    }

    /// The top-most edge of the rectangle (inclusive).
    pub fn top(&self) -> i32 {
        self.top
    }

    /// The right-most edge of the rectangle (exclusive).
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    /// The bottom-most edge of the rectangle (exclusive).
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// The width of the rectangle.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The height of the rectangle.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The dimensions of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Does this rectangle have area zero?
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Is the specified point in this rectangle?
    pub fn contains(&self, p: Point) -> bool {
        self.left <= p.x && p.x < self.right() && self.top <= p.y && p.y < self.bottom()
    }

    /// Return a rectangle including all the area included by this
    /// rectangle and another.  If either rectangle has zero area, it will
    /// be excluded.
    pub fn union(&self, other: &Rect) -> Rect {
        if other.is_empty() {
            self.to_owned()
        } else if self.is_empty() {
            other.to_owned()
        } else {
            Rect::ltrb(
                min(self.left, other.left),
                min(self.top, other.top),
                max(self.right(), other.right()),
                max(self.bottom(), other.bottom()),
            )
        }
    }
}
