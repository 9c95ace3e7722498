// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content of a tooltip window.

use std::rc::Rc;

use shelf_core::widget::{Invalidate, MeasureInput, Measured, Widget};
use shelf_render::{Canvas, Color};

use crate::measure;
use crate::text::{TextBlock, TextMetrics};

/// A `ByContent` text leaf meant to be the root of its own window.
///
/// Unlike [`Label`](crate::Label) it ignores the offered cross extent: the
/// window is sized around the text on both axes.
#[derive(Clone, Debug)]
pub struct Tooltip {
    text: TextBlock,
    padding: u32,
}

impl Tooltip {
    /// Creates a tooltip showing `text`, which may span several lines.
    #[must_use]
    pub fn new(metrics: Rc<dyn TextMetrics>, text: &str, color: Color) -> Self {
        let mut block = TextBlock::new(metrics, color);
        block.set_text(text);
        Self {
            text: block,
            padding: 3,
        }
    }

    /// Sets the space kept around the text.
    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// The shown text.
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
}

impl Widget for Tooltip {
    fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
        measure::natural(input, self.text.size(), self.padding)
    }

    fn paint(&self, canvas: &mut Canvas) {
        let bounds = canvas.bounds();
        self.text.paint_centered(canvas, bounds);
    }
}
