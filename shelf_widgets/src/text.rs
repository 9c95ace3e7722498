// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement and drawing.
//!
//! Widgets never shape text themselves. They hold a shared [`TextMetrics`]
//! collaborator that reports the size of a line and draws it onto a canvas.
//! [`FixedAdvance`] is the built-in implementation: every character is the
//! same width and is drawn as a solid block, which keeps layout exact and
//! deterministic without a font.

use core::fmt;
use std::rc::Rc;

use kurbo::{Point, Rect};
use shelf_render::{Canvas, Color, IntSize};

/// Measures and draws single lines of text.
pub trait TextMetrics: fmt::Debug {
    /// Size of one line of text, in pixels.
    fn line_size(&self, line: &str) -> IntSize;

    /// Draws one line with its top-left corner at `origin`.
    fn draw_line(&self, canvas: &mut Canvas, line: &str, origin: Point, color: Color);
}

/// Monospaced metrics: every character advances by the same amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedAdvance {
    /// Horizontal advance per character.
    pub advance: u32,
    /// Height of a line.
    pub line_height: u32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self {
            advance: 7,
            line_height: 13,
        }
    }
}

impl FixedAdvance {
    /// Creates metrics with the given advance and line height.
    #[must_use]
    pub const fn new(advance: u32, line_height: u32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMetrics for FixedAdvance {
    fn line_size(&self, line: &str) -> IntSize {
        let chars = u32::try_from(line.chars().count()).unwrap_or(u32::MAX);
        IntSize::new(chars.saturating_mul(self.advance), self.line_height)
    }

    fn draw_line(&self, canvas: &mut Canvas, line: &str, origin: Point, color: Color) {
        let advance = f64::from(self.advance);
        let inset = if self.advance > 2 { 1.0 } else { 0.0 };
        let top = origin.y + 2.0;
        let bottom = origin.y + f64::from(self.line_height) - 2.0;
        if bottom <= top {
            return;
        }
        for (i, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            #[expect(
                clippy::cast_precision_loss,
                reason = "a line never holds 2^52 characters"
            )]
            let x = origin.x + i as f64 * advance;
            canvas.fill_rect(Rect::new(x + inset, top, x + advance - inset, bottom), color);
        }
    }
}

/// One or more lines of text drawn in a single color.
#[derive(Clone, Debug)]
pub struct TextBlock {
    metrics: Rc<dyn TextMetrics>,
    lines: Vec<String>,
    color: Color,
}

impl TextBlock {
    /// Creates an empty block.
    #[must_use]
    pub fn new(metrics: Rc<dyn TextMetrics>, color: Color) -> Self {
        Self {
            metrics,
            lines: Vec::new(),
            color,
        }
    }

    /// The current lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Text color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replaces the lines. Returns whether anything changed.
    pub fn set_lines<I, S>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines == self.lines {
            return false;
        }
        self.lines = lines;
        true
    }

    /// Replaces the text, splitting it at newlines. Returns whether anything
    /// changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.set_lines(text.lines())
    }

    /// Changes the color. Returns whether anything changed.
    pub fn set_color(&mut self, color: Color) -> bool {
        let changed = self.color != color;
        self.color = color;
        changed
    }

    /// Size of the whole block: widest line by the sum of line heights.
    #[must_use]
    pub fn size(&self) -> IntSize {
        self.lines.iter().fold(IntSize::ZERO, |acc, line| {
            let s = self.metrics.line_size(line);
            IntSize::new(
                acc.width.max(s.width),
                acc.height.saturating_add(s.height),
            )
        })
    }

    /// Draws the block centered in `area`, each line centered on its own.
    pub fn paint_centered(&self, canvas: &mut Canvas, area: Rect) {
        let block = self.size();
        let mut y = area.y0 + (area.height() - f64::from(block.height)) / 2.0;
        for line in &self.lines {
            let s = self.metrics.line_size(line);
            let x = area.x0 + (area.width() - f64::from(s.width)) / 2.0;
            self.metrics
                .draw_line(canvas, line, Point::new(x.floor(), y.floor()), self.color);
            y += f64::from(s.height);
        }
    }

    /// Draws the first line left-aligned at `x`, centered vertically in
    /// `area`.
    pub fn paint_line_at(&self, canvas: &mut Canvas, area: Rect, x: f64) {
        let Some(line) = self.lines.first() else {
            return;
        };
        let s = self.metrics.line_size(line);
        let y = area.y0 + (area.height() - f64::from(s.height)) / 2.0;
        self.metrics
            .draw_line(canvas, line, Point::new(x.floor(), y.floor()), self.color);
    }
}
