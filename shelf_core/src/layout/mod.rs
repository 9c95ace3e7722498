// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout parameters and the size distributor.
//!
//! Panels lay their children out in a single row (horizontal panel) or
//! column (vertical panel). The direction along which siblings follow each
//! other is the *primary axis*; the other one is the *cross axis*. Every
//! helper here speaks in primary/cross terms so the passes never branch on
//! orientation themselves.

mod distribute;

pub use distribute::{Distribution, DistributionInput, distribute};

use shelf_render::{IntPoint, IntSize};

/// How a node obtains its primary-axis size.
///
/// Fixed for the node's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizingMode {
    /// Intrinsic size, reported by the widget's `measure_content`.
    ByContent,
    /// Space negotiated by the parent through the size distributor.
    ByLayout,
}

/// Direction of the primary axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children follow each other left to right.
    #[default]
    Horizontal,
    /// Children follow each other top to bottom.
    Vertical,
}

impl Orientation {
    /// Primary-axis extent of `size`.
    #[inline]
    #[must_use]
    pub const fn main(self, size: IntSize) -> u32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Cross-axis extent of `size`.
    #[inline]
    #[must_use]
    pub const fn cross(self, size: IntSize) -> u32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Primary-axis coordinate of `p`.
    #[inline]
    #[must_use]
    pub const fn main_pos(self, p: IntPoint) -> i32 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// Cross-axis coordinate of `p`.
    #[inline]
    #[must_use]
    pub const fn cross_pos(self, p: IntPoint) -> i32 {
        match self {
            Self::Horizontal => p.y,
            Self::Vertical => p.x,
        }
    }

    /// Builds a size from primary and cross extents.
    #[inline]
    #[must_use]
    pub const fn size(self, main: u32, cross: u32) -> IntSize {
        match self {
            Self::Horizontal => IntSize::new(main, cross),
            Self::Vertical => IntSize::new(cross, main),
        }
    }

    /// Builds a point from primary and cross coordinates.
    #[inline]
    #[must_use]
    pub const fn point(self, main: i32, cross: i32) -> IntPoint {
        match self {
            Self::Horizontal => IntPoint::new(main, cross),
            Self::Vertical => IntPoint::new(cross, main),
        }
    }
}

/// Per-window layout inputs supplied by the window system.
///
/// Threaded by value into every scheduler call; read-only during passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayoutContext {
    /// Primary-axis direction of this window.
    pub orientation: Orientation,
}

impl LayoutContext {
    /// A context for a horizontal panel.
    pub const HORIZONTAL: Self = Self {
        orientation: Orientation::Horizontal,
    };

    /// A context for a vertical panel.
    pub const VERTICAL: Self = Self {
        orientation: Orientation::Vertical,
    };
}

/// Spacing a node keeps around and between its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Space at both ends of the primary axis, inside the border.
    pub outer: u32,
    /// Space between consecutive visible children.
    pub gap: u32,
    /// Space at both ends of the cross axis, inside the border.
    pub cross: u32,
}

impl Padding {
    /// Creates a padding record.
    #[must_use]
    pub const fn new(outer: u32, gap: u32, cross: u32) -> Self {
        Self { outer, gap, cross }
    }
}

/// Layout-affecting parameters of a node, set by the widget's owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayoutParams {
    /// Padding around and between children.
    pub padding: Padding,
    /// Upper bound for the primary-axis size of each flexible child; `0`
    /// means no cap.
    pub max_flexible: u32,
}
