// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hooks a widget plugs into the engine.
//!
//! A widget never decides where it is drawn, in which order, or (for
//! `ByLayout` nodes) how big it is. It only answers four questions the
//! scheduler asks:
//!
//! - how big is your content? ([`Widget::measure_content`], `ByContent` only)
//! - what do you look like? ([`Widget::paint`])
//! - you or one of your children moved or resized ([`Widget::on_layout_changed`])
//! - what should a tooltip over you say? ([`Widget::tooltip_text`])

use core::any::Any;
use core::fmt;

use shelf_render::{Canvas, IntRect, IntSize};

use crate::layout::{Orientation, Padding};

/// Inputs handed to [`Widget::measure_content`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureInput<'a> {
    /// Size the node held before this measurement.
    pub current: IntSize,
    /// Primary-axis direction of the window.
    pub orientation: Orientation,
    /// Cross-axis extent offered by the parent's interior.
    pub cross: u32,
    /// The node's own padding, for containers that size around children.
    pub padding: Padding,
    /// The node's border width, reserved on every side.
    pub border: u32,
    /// Sizes of the node's visible children, already measured.
    pub children: &'a [IntSize],
}

/// Result of [`Widget::measure_content`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measured {
    /// The new size, border included.
    pub size: IntSize,
    /// Whether `size` differs from the size held on entry.
    pub changed: bool,
}

impl Measured {
    /// Builds a result, deriving `changed` by comparing against `current`.
    #[must_use]
    pub fn against(current: IntSize, size: IntSize) -> Self {
        Self {
            size,
            changed: size != current,
        }
    }

    /// The node keeps its current size.
    #[must_use]
    pub fn unchanged(current: IntSize) -> Self {
        Self {
            size: current,
            changed: false,
        }
    }
}

/// Geometry handed to [`Widget::on_layout_changed`].
#[derive(Clone, Copy, Debug)]
pub struct Geometry<'a> {
    /// The node's rectangle in window coordinates.
    pub rect: IntRect,
    /// Rectangles of the node's visible children, in child order.
    pub children: &'a [IntRect],
    /// Primary-axis direction of the window.
    pub orientation: Orientation,
}

/// What a widget mutation requires from the engine.
///
/// Returned by closures passed to [`NodeStore::edit`](crate::node::NodeStore::edit).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Invalidate {
    /// Nothing visible changed.
    #[default]
    Nothing,
    /// Appearance changed, size did not.
    Paint,
    /// Content size may have changed.
    Size,
}

/// Hook points a widget customizes.
///
/// Only `paint` is mandatory. `ByLayout` widgets never have
/// `measure_content` called, and the default returns the current size.
pub trait Widget: Any + fmt::Debug {
    /// Reports the widget's intrinsic size.
    ///
    /// Called in the content sizing pass for `ByContent` nodes whose size is
    /// dirty. Must depend only on the widget's own state and `input`.
    fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
        Measured::unchanged(input.current)
    }

    /// Draws foreground content.
    ///
    /// The engine has already painted the node's style (background and
    /// border) into `canvas`. Missing resources draw nothing.
    fn paint(&self, canvas: &mut Canvas);

    /// Called after layout moved or resized this node or any of its direct
    /// children.
    fn on_layout_changed(&mut self, geometry: &Geometry<'_>) {
        _ = geometry;
    }

    /// Text for a tooltip shown over this node.
    fn tooltip_text(&self) -> Option<String> {
        None
    }
}

/// A widget that paints nothing beyond its style.
///
/// Useful for plain containers and spacers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blank;

impl Widget for Blank {
    fn paint(&self, canvas: &mut Canvas) {
        _ = canvas;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_against_detects_change() {
        let a = IntSize::new(10, 20);
        assert!(!Measured::against(a, a).changed);
        assert!(Measured::against(a, IntSize::new(11, 20)).changed);
        assert_eq!(Measured::unchanged(a).size, a);
    }

    #[test]
    fn default_hooks() {
        let mut blank = Blank;
        let input = MeasureInput {
            current: IntSize::new(3, 4),
            orientation: Orientation::Horizontal,
            cross: 4,
            padding: Padding::default(),
            border: 0,
            children: &[],
        };
        let m = blank.measure_content(&input);
        assert_eq!(m.size, IntSize::new(3, 4));
        assert!(!m.changed);
        assert_eq!(blank.tooltip_text(), None);
    }
}
