// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared `measure_content` arithmetic.

use shelf_core::widget::{MeasureInput, Measured};
use shelf_render::IntSize;

/// Space taken by `pad` and the border at both ends of an axis.
fn edges(input: &MeasureInput<'_>, pad: u32) -> u32 {
    pad.saturating_add(input.border).saturating_mul(2)
}

/// A leaf that grows along the primary axis with its content and fills the
/// offered cross extent.
///
/// With nothing offered (a root), the cross extent follows the content too.
pub(crate) fn strip(input: &MeasureInput<'_>, content: IntSize, pad: u32) -> Measured {
    let o = input.orientation;
    let edge = edges(input, pad);
    let main = o.main(content).saturating_add(edge);
    let cross = if input.cross == 0 {
        o.cross(content).saturating_add(edge)
    } else {
        input.cross
    };
    Measured::against(input.current, o.size(main, cross))
}

/// A leaf sized by its content on both axes.
pub(crate) fn natural(input: &MeasureInput<'_>, content: IntSize, pad: u32) -> Measured {
    let edge = edges(input, pad);
    let size = IntSize::new(
        content.width.saturating_add(edge),
        content.height.saturating_add(edge),
    );
    Measured::against(input.current, size)
}

/// A square leaf as thick as the offered cross extent.
pub(crate) fn square(input: &MeasureInput<'_>) -> Measured {
    let side = input.cross;
    Measured::against(input.current, IntSize::new(side, side))
}

/// A container exactly long enough for its visible children laid end to end.
///
/// An empty container takes no primary-axis space.
pub(crate) fn row(input: &MeasureInput<'_>) -> Measured {
    let o = input.orientation;
    let pad = input.padding;
    let n = u32::try_from(input.children.len()).unwrap_or(u32::MAX);
    let cross = if input.cross == 0 {
        input
            .children
            .iter()
            .map(|c| o.cross(*c))
            .max()
            .unwrap_or(0)
            .saturating_add(edges(input, pad.cross))
    } else {
        input.cross
    };
    if n == 0 {
        return Measured::against(input.current, o.size(0, cross));
    }
    let main = input
        .children
        .iter()
        .fold(0_u32, |acc, c| acc.saturating_add(o.main(*c)))
        .saturating_add(pad.gap.saturating_mul(n - 1))
        .saturating_add(edges(input, pad.outer));
    Measured::against(input.current, o.size(main, cross))
}
