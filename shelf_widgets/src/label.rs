// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A plain text leaf.

use std::rc::Rc;

use shelf_core::widget::{Invalidate, MeasureInput, Measured, Widget};
use shelf_render::{Canvas, Color};

use crate::measure;
use crate::text::{TextBlock, TextMetrics};

/// Default space between the text and the node's border.
pub const DEFAULT_TEXT_PADDING: u32 = 4;

/// A `ByContent` text leaf.
///
/// Grows along the primary axis with its text and fills the cross extent the
/// parent offers. The text is centered.
#[derive(Clone, Debug)]
pub struct Label {
    text: TextBlock,
    padding: u32,
}

impl Label {
    /// Creates a label.
    #[must_use]
    pub fn new(metrics: Rc<dyn TextMetrics>, text: &str, color: Color) -> Self {
        let mut block = TextBlock::new(metrics, color);
        block.set_text(text);
        Self {
            text: block,
            padding: DEFAULT_TEXT_PADDING,
        }
    }

    /// Sets the space kept around the text.
    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// The label's text.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.text()
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: &str) -> Invalidate {
        if self.text.set_text(text) {
            Invalidate::Size
        } else {
            Invalidate::Nothing
        }
    }

    /// Changes the text color.
    pub fn set_color(&mut self, color: Color) -> Invalidate {
        if self.text.set_color(color) {
            Invalidate::Paint
        } else {
            Invalidate::Nothing
        }
    }
}

impl Widget for Label {
    fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
        measure::strip(input, self.text.size(), self.padding)
    }

    fn paint(&self, canvas: &mut Canvas) {
        let bounds = canvas.bounds();
        self.text.paint_centered(canvas, bounds);
    }
}

#[cfg(test)]
mod tests {
    use shelf_core::layout::{LayoutContext, SizingMode};
    use shelf_core::node::{FrameState, NodeStore};
    use shelf_core::widget::Blank;
    use shelf_render::{IntSize, Pixmap};

    use super::*;
    use crate::text::FixedAdvance;

    fn frame(store: &mut NodeStore, root: shelf_core::node::NodeId, out: &mut Pixmap) {
        let ctx = LayoutContext::HORIZONTAL;
        let mut state = FrameState::new();
        store.absorb(&mut state);
        store.measure(root, ctx, &mut state);
        store.arrange(root, ctx, &mut state);
        store.redraw(root, out, &mut state);
    }

    #[test]
    fn label_grows_with_text() {
        let metrics = Rc::new(FixedAdvance::default());
        let mut store = NodeStore::default();
        let root = store.create_node(Blank, SizingMode::ByLayout);
        store.set_root_size(root, IntSize::new(200, 24));
        let label = store.create_node(Label::new(metrics, "abc", Color::WHITE), SizingMode::ByContent);
        store.add_child(root, label);

        let mut out = Pixmap::new(IntSize::new(200, 24));
        frame(&mut store, root, &mut out);
        assert_eq!(store.size(label), IntSize::new(29, 24));

        let inv = store.edit::<Label>(label, |l| l.set_text("abcdef"));
        assert_eq!(inv, Some(Invalidate::Size));
        frame(&mut store, root, &mut out);
        assert_eq!(store.size(label), IntSize::new(50, 24));

        let inv = store.edit::<Label>(label, |l| l.set_text("abcdef"));
        assert_eq!(inv, Some(Invalidate::Nothing));
        assert!(!store.needs_frame());
    }

    #[test]
    fn label_text_is_drawn() {
        let metrics = Rc::new(FixedAdvance::default());
        let mut store = NodeStore::default();
        let root = store.create_node(Blank, SizingMode::ByLayout);
        store.set_root_size(root, IntSize::new(100, 21));
        let label = store.create_node(
            Label::new(metrics, "x", Color::WHITE).with_padding(0),
            SizingMode::ByContent,
        );
        store.add_child(root, label);
        let mut out = Pixmap::new(IntSize::new(100, 21));
        frame(&mut store, root, &mut out);
        // One 7x13 glyph centered in a 7x21 label: rows 4..17, block rows 6..15.
        assert_eq!(out.pixel(3, 10), Some([255, 255, 255, 255]));
        assert_eq!(out.pixel(3, 1), Some([0, 0, 0, 0]));
    }
}
