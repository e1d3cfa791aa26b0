// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Half-open integer rectangles.

use crate::point::{Point, Size};

/// Axis-aligned rectangle `[bottom_left, top_right)` on the integer grid.
///
/// The bottom and left edges belong to the rectangle; the top and right
/// edges do not. Two rectangles that share an edge therefore do not overlap,
/// and a row of rectangles placed edge to edge covers every cell exactly once.
///
/// `Bounds` is plain geometry and is not validated: an inverted rectangle
/// (see [`Bounds::is_inverted`]) can be represented, it just has no area.
/// Blocks reject inverted bounds at construction.
///
/// Extents wider than `i32::MAX` can be represented too. [`Bounds::width`],
/// [`Bounds::height`] and [`Bounds::size`] saturate for them, while
/// [`Bounds::area`] and [`Bounds::is_empty`] stay exact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    bottom_left: Point,
    top_right: Point,
}

impl Bounds {
    /// Create bounds from two corners.
    #[inline(always)]
    pub const fn new(bottom_left: Point, top_right: Point) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// Create bounds from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin, origin.add(size))
    }

    /// Inclusive lower-left corner.
    #[inline]
    pub const fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    /// Exclusive upper-right corner.
    #[inline]
    pub const fn top_right(&self) -> Point {
        self.top_right
    }

    /// `top_right - bottom_left`, saturating per axis.
    #[inline]
    pub const fn size(&self) -> Size {
        Point::new(self.width(), self.height())
    }

    /// Horizontal extent. Negative when inverted.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.top_right.px.saturating_sub(self.bottom_left.px)
    }

    /// Vertical extent. Negative when inverted.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.top_right.py.saturating_sub(self.bottom_left.py)
    }

    /// Whether the corners are out of order on either axis.
    #[inline]
    pub const fn is_inverted(&self) -> bool {
        !self.bottom_left.precedes(self.top_right)
    }

    /// Return true if the rectangle covers no cells (zero-width, zero-height, or inverted).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.top_right.px <= self.bottom_left.px || self.top_right.py <= self.bottom_left.py
    }

    /// Number of cells covered, in a widened accumulator.
    ///
    /// Empty and inverted rectangles have zero area.
    #[inline]
    pub const fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            let width = self.top_right.px as i64 - self.bottom_left.px as i64;
            let height = self.top_right.py as i64 - self.bottom_left.py as i64;
            width.saturating_mul(height)
        }
    }

    /// Whether the cell at `point` lies inside the rectangle.
    #[inline]
    pub const fn contains_point(&self, point: Point) -> bool {
        self.bottom_left.px <= point.px
            && self.bottom_left.py <= point.py
            && point.px < self.top_right.px
            && point.py < self.top_right.py
    }

    /// Whether `other` lies entirely inside `self`.
    ///
    /// An empty `other` is contained as long as its corners are within `self`.
    #[inline]
    pub const fn contains(&self, other: &Self) -> bool {
        self.bottom_left.precedes(other.bottom_left) && other.top_right.precedes(self.top_right)
    }

    /// Determines whether this rectangle shares any cell with another.
    ///
    /// Unlike closed boxes, rectangles that only touch along an edge or at a
    /// corner do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockcanvas_geom::{Bounds, Point};
    ///
    /// let left = Bounds::new(Point::new(0, 0), Point::new(5, 10));
    /// let right = Bounds::new(Point::new(5, 0), Point::new(10, 10));
    /// assert!(!left.overlaps(&right));
    ///
    /// let middle = Bounds::new(Point::new(4, 4), Point::new(6, 6));
    /// assert!(left.overlaps(&middle));
    /// assert!(right.overlaps(&middle));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// The shared region of two rectangles, or `None` if they share no cell.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let out = Self::new(
            Point::new(
                self.bottom_left.px.max(other.bottom_left.px),
                self.bottom_left.py.max(other.bottom_left.py),
            ),
            Point::new(
                self.top_right.px.min(other.top_right.px),
                self.top_right.py.min(other.top_right.py),
            ),
        );
        (!out.is_empty()).then_some(out)
    }

    /// The smallest rectangle enclosing both.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            Point::new(
                self.bottom_left.px.min(other.bottom_left.px),
                self.bottom_left.py.min(other.bottom_left.py),
            ),
            Point::new(
                self.top_right.px.max(other.top_right.px),
                self.top_right.py.max(other.top_right.py),
            ),
        )
    }
}

#[cfg(feature = "kurbo")]
impl From<Bounds> for kurbo::Rect {
    fn from(b: Bounds) -> Self {
        Self::new(
            f64::from(b.bottom_left.px),
            f64::from(b.bottom_left.py),
            f64::from(b.top_right.px),
            f64::from(b.top_right.py),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Bounds;
    use crate::Point;

    fn b(x0: i32, y0: i32, x1: i32, y1: i32) -> Bounds {
        Bounds::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn area_and_empty() {
        let mut r = b(5, 7, 10, 9);
        assert_eq!(r.area(), 10);
        assert!(!r.is_empty());
        assert!(!r.is_inverted());

        // Inverted rectangles are empty and get zero area.
        r = b(5, 7, -10, 9);
        assert_eq!(r.area(), 0);
        assert!(r.is_empty());
        assert!(r.is_inverted());

        // Zero-area rectangles are empty but not inverted.
        r = b(5, 7, 5, 9);
        assert_eq!(r.area(), 0);
        assert!(r.is_empty());
        assert!(!r.is_inverted());
    }

    #[test]
    fn area_does_not_overflow() {
        let r = b(i32::MIN / 2, 0, i32::MAX / 2, 4);
        assert_eq!(r.area(), i64::from(r.width()) * 4);
    }

    #[test]
    fn extents_past_i32_saturate_but_area_is_exact() {
        let r = b(i32::MIN, 0, i32::MAX, 1);
        assert_eq!(r.width(), i32::MAX);
        assert_eq!(r.size(), Point::new(i32::MAX, 1));
        assert_eq!(r.area(), i64::from(u32::MAX));
        assert!(!r.is_empty());

        let inverted = b(i32::MAX, 0, i32::MIN, 1);
        assert_eq!(inverted.width(), i32::MIN);
        assert_eq!(inverted.area(), 0);
        assert!(inverted.is_empty());
    }

    #[test]
    fn contains_point_is_half_open() {
        let r = b(0, 0, 5, 5);
        assert!(r.contains_point(Point::new(0, 0)));
        assert!(r.contains_point(Point::new(4, 4)));
        assert!(!r.contains_point(Point::new(5, 0)));
        assert!(!r.contains_point(Point::new(0, 5)));
        assert!(!b(3, 3, 3, 3).contains_point(Point::new(3, 3)));
    }

    #[test]
    fn containment() {
        let outer = b(0, 0, 10, 10);
        assert!(outer.contains(&outer));
        assert!(outer.contains(&b(2, 2, 10, 5)));
        assert!(!outer.contains(&b(2, 2, 11, 5)));
        assert!(!outer.contains(&b(-1, 0, 3, 3)));
    }

    #[test]
    fn intersection_and_union() {
        let a = b(0, 0, 4, 4);
        let c = b(2, 2, 6, 6);
        assert_eq!(a.intersection(&c), Some(b(2, 2, 4, 4)));
        assert_eq!(a.union(&c), b(0, 0, 6, 6));
        // Touching at a corner only.
        assert_eq!(a.intersection(&b(4, 4, 8, 8)), None);
    }

    #[test]
    fn from_origin_size_matches_corners() {
        let r = Bounds::from_origin_size(Point::new(3, 4), Point::new(5, 6));
        assert_eq!(r, b(3, 4, 8, 10));
        assert_eq!(r.size(), Point::new(5, 6));
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn converts_to_kurbo() {
        let rect: kurbo::Rect = b(1, 2, 3, 4).into();
        assert_eq!(rect, kurbo::Rect::new(1.0, 2.0, 3.0, 4.0));
    }
}
