// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer points and sizes.

use core::fmt;
use core::ops::{Add, Sub};

/// A point on the integer canvas grid.
///
/// The origin is the bottom-left corner of the canvas; `px` grows to the
/// right and `py` grows upwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub px: i32,
    /// Vertical coordinate.
    pub py: i32,
}

/// A width/height pair, stored as the difference of two corners.
///
/// `px` is the width and `py` is the height.
pub type Size = Point;

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new point.
    #[inline(always)]
    pub const fn new(px: i32, py: i32) -> Self {
        Self { px, py }
    }

    /// Componentwise sum.
    #[allow(
        clippy::should_implement_trait,
        reason = "Callers use the named form in const contexts; `Add` is implemented as well."
    )]
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.px + other.px, self.py + other.py)
    }

    /// Componentwise difference `self - other`.
    ///
    /// A block's size is `top_right.get_diff(bottom_left)`.
    #[inline]
    pub const fn get_diff(self, other: Self) -> Self {
        Self::new(self.px - other.px, self.py - other.py)
    }

    /// Componentwise difference `self - other`, or `None` if either axis overflows `i32`.
    #[inline]
    pub const fn checked_diff(self, other: Self) -> Option<Self> {
        match (self.px.checked_sub(other.px), self.py.checked_sub(other.py)) {
            (Some(px), Some(py)) => Some(Self::new(px, py)),
            _ => None,
        }
    }

    /// Whether `self` is at or before `other` on both axes.
    ///
    /// This is the corner ordering every block's bounds must satisfy.
    #[inline]
    pub const fn precedes(self, other: Self) -> bool {
        self.px <= other.px && self.py <= other.py
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.px + rhs.px, self.py + rhs.py)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.get_diff(rhs)
    }
}

impl From<(i32, i32)> for Point {
    fn from((px, py): (i32, i32)) -> Self {
        Self::new(px, py)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.px, self.py)
    }
}
