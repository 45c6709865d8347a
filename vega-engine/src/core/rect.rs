//! Integer Points and Rectangles
//!
//! Pixel-space geometry for the simulation. Screen coordinates: origin at the
//! top-left corner, x grows right, y grows down.

use std::fmt;

/// A point in pixel space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle.
///
/// Intersection is half-open: rectangles that only share an edge do not
/// intersect, and empty rectangles never intersect anything.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Left edge.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Top edge.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if two rectangles overlap.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Check if the horizontal spans overlap (ignoring y).
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {}, {}x{})", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.origin(), Point::new(10, 20));
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(25, 25, 50, 50);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 50, 50);
        let right = Rect::new(50, 0, 50, 50);
        let below = Rect::new(0, 50, 50, 50);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));

        // One pixel of overlap is enough
        let below_overlap = Rect::new(0, 49, 50, 50);
        assert!(a.intersects(&below_overlap));
    }

    #[test]
    fn test_empty_never_intersects() {
        let a = Rect::new(0, 0, 50, 50);
        let empty = Rect::new(10, 10, 0, 10);
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(250, 390, 100, 250);
        let inner = Rect::new(275, 450, 50, 50);
        assert!(outer.intersects(&inner));
    }

    #[test]
    fn test_overlaps_horizontally() {
        let a = Rect::new(0, 0, 50, 50);
        assert!(a.overlaps_horizontally(&Rect::new(49, 500, 10, 10)));
        assert!(!a.overlaps_horizontally(&Rect::new(50, 0, 10, 10)));
    }
}
