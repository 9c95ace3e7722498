// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel geometry.
//!
//! Layout works in whole pixels: sizes are unsigned so they can never go
//! negative, positions are signed so a child centered inside a smaller parent
//! may start before the parent's origin.

use core::fmt;

/// A position in window-surface pixels.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl IntPoint {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Debug for IntPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width and height in pixels, border included.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntSize {
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl IntSize {
    /// The empty size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a size.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either extent is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    #[inline]
    #[must_use]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Debug for IntSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis-aligned rectangle in window-surface pixels.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    /// Top-left corner.
    pub origin: IntPoint,
    /// Extent.
    pub size: IntSize,
}

impl IntRect {
    /// Creates a rectangle from its origin and size.
    #[inline]
    #[must_use]
    pub const fn new(origin: IntPoint, size: IntSize) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from components.
    #[inline]
    #[must_use]
    pub const fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: IntPoint::new(x, y),
            size: IntSize::new(width, height),
        }
    }

    /// Exclusive right edge.
    #[inline]
    #[must_use]
    pub fn x1(self) -> i64 {
        i64::from(self.origin.x) + i64::from(self.size.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    #[must_use]
    pub fn y1(self) -> i64 {
        i64::from(self.origin.y) + i64::from(self.size.height)
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Returns `true` if the pixel at `p` lies inside the rectangle.
    #[must_use]
    pub fn contains(self, p: IntPoint) -> bool {
        i64::from(p.x) >= i64::from(self.origin.x)
            && i64::from(p.x) < self.x1()
            && i64::from(p.y) >= i64::from(self.origin.y)
            && i64::from(p.y) < self.y1()
    }

    /// Smallest rectangle covering both `self` and `other`.
    ///
    /// Empty rectangles do not contribute.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        let x0 = self.origin.x.min(other.origin.x);
        let y0 = self.origin.y.min(other.origin.y);
        let x1 = self.x1().max(other.x1());
        let y1 = self.y1().max(other.y1());
        Self::from_xywh(x0, y0, span(x0, x1), span(y0, y1))
    }
}

impl fmt::Debug for IntRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.size, self.origin)
    }
}

fn span(start: i32, end: i64) -> u32 {
    u32::try_from(end - i64::from(start)).unwrap_or(u32::MAX)
}
