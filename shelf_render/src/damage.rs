// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame damage tracking for partial presentation.

use crate::geometry::IntRect;

/// The part of a window frame that changed during one frame.
///
/// The presenter can use this to copy only the affected area of the frame to
/// the window instead of the whole surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DamageRegion {
    /// The entire frame needs presenting (first frame, frame resized).
    Full,
    /// A list of frame rectangles that were repainted.
    Rects(Vec<IntRect>),
    /// Nothing changed; the previous frame can be reused.
    #[default]
    None,
}

impl DamageRegion {
    /// Returns `true` if no region needs presenting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Adds a repainted rectangle. Empty rectangles are ignored.
    pub fn add_rect(&mut self, rect: IntRect) {
        if rect.is_empty() {
            return;
        }
        match self {
            Self::Full => {}
            Self::Rects(rects) => rects.push(rect),
            Self::None => *self = Self::Rects(vec![rect]),
        }
    }

    /// Bounding box of the damage, or `None` when there is none.
    ///
    /// `frame` is the full frame rectangle, returned for [`Full`](Self::Full).
    #[must_use]
    pub fn bounds(&self, frame: IntRect) -> Option<IntRect> {
        match self {
            Self::Full => Some(frame),
            Self::Rects(rects) => rects.iter().copied().reduce(IntRect::union),
            Self::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rect_promotes_none() {
        let mut d = DamageRegion::None;
        d.add_rect(IntRect::from_xywh(0, 0, 0, 10));
        assert!(d.is_empty(), "empty rects add nothing");
        d.add_rect(IntRect::from_xywh(0, 0, 4, 4));
        assert_eq!(d, DamageRegion::Rects(vec![IntRect::from_xywh(0, 0, 4, 4)]));
    }

    #[test]
    fn full_absorbs_everything() {
        let mut d = DamageRegion::Full;
        d.add_rect(IntRect::from_xywh(0, 0, 4, 4));
        assert_eq!(d, DamageRegion::Full);
    }

    #[test]
    fn bounds_unions_rects() {
        let frame = IntRect::from_xywh(0, 0, 100, 20);
        let mut d = DamageRegion::None;
        assert_eq!(d.bounds(frame), None);
        d.add_rect(IntRect::from_xywh(10, 2, 5, 5));
        d.add_rect(IntRect::from_xywh(40, 0, 10, 20));
        assert_eq!(d.bounds(frame), Some(IntRect::from_xywh(10, 0, 40, 20)));
        assert_eq!(DamageRegion::Full.bounds(frame), Some(frame));
    }
}
