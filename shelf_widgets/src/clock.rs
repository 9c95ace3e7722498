// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clock: one or two preformatted lines.
//!
//! Reading the time and formatting it is the caller's job; the widget only
//! holds the resulting strings. Setters report [`Invalidate::Size`] when the
//! visible text actually changed, so a once-per-second timer that produces
//! the same minute string costs nothing.

use std::rc::Rc;

use shelf_core::widget::{Invalidate, MeasureInput, Measured, Widget};
use shelf_render::{Canvas, Color};

use crate::label::DEFAULT_TEXT_PADDING;
use crate::measure;
use crate::text::{TextBlock, TextMetrics};

/// A `ByContent` clock showing a time line and an optional date line.
#[derive(Clone, Debug)]
pub struct Clock {
    text: TextBlock,
    time: String,
    date: Option<String>,
    tooltip: Option<String>,
    padding: u32,
}

impl Clock {
    /// Creates an empty clock.
    #[must_use]
    pub fn new(metrics: Rc<dyn TextMetrics>, color: Color) -> Self {
        Self {
            text: TextBlock::new(metrics, color),
            time: String::new(),
            date: None,
            tooltip: None,
            padding: DEFAULT_TEXT_PADDING,
        }
    }

    /// Sets the space kept around the text.
    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// The time line.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// The date line, if shown.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Sets the time line.
    pub fn set_time(&mut self, time: &str) -> Invalidate {
        let date = self.date.take();
        self.set_lines(time, date.as_deref())
    }

    /// Sets or clears the date line.
    pub fn set_date(&mut self, date: Option<&str>) -> Invalidate {
        let time = core::mem::take(&mut self.time);
        self.set_lines(&time, date)
    }

    /// Sets both lines at once.
    pub fn set_lines(&mut self, time: &str, date: Option<&str>) -> Invalidate {
        time.clone_into(&mut self.time);
        self.date = date.map(str::to_owned);
        let lines = core::iter::once(time).chain(date);
        if self.text.set_lines(lines) {
            Invalidate::Size
        } else {
            Invalidate::Nothing
        }
    }

    /// Sets the hover text, for example a long-form date.
    pub fn set_tooltip(&mut self, tooltip: Option<String>) -> Invalidate {
        self.tooltip = tooltip;
        Invalidate::Nothing
    }
}

impl Widget for Clock {
    fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
        measure::strip(input, self.text.size(), self.padding)
    }

    fn paint(&self, canvas: &mut Canvas) {
        let bounds = canvas.bounds();
        self.text.paint_centered(canvas, bounds);
    }

    fn tooltip_text(&self) -> Option<String> {
        self.tooltip.clone()
    }
}

#[cfg(test)]
mod tests {
    use shelf_core::layout::{Orientation, Padding};
    use shelf_render::IntSize;

    use super::*;
    use crate::text::FixedAdvance;

    fn clock() -> Clock {
        Clock::new(Rc::new(FixedAdvance::default()), Color::WHITE)
    }

    #[test]
    fn same_minute_is_not_an_invalidation() {
        let mut c = clock();
        assert_eq!(c.set_time("12:30"), Invalidate::Size);
        assert_eq!(c.set_time("12:30"), Invalidate::Nothing);
        assert_eq!(c.set_time("12:31"), Invalidate::Size);
        assert_eq!(c.time(), "12:31");
    }

    #[test]
    fn date_line_adds_height_and_width() {
        let mut c = clock();
        c.set_time("12:30");
        assert_eq!(c.set_date(Some("Sat 17 Oct")), Invalidate::Size);
        assert_eq!(c.time(), "12:30", "setting the date keeps the time");
        assert_eq!(c.date(), Some("Sat 17 Oct"));

        let input = MeasureInput {
            current: IntSize::ZERO,
            orientation: Orientation::Vertical,
            cross: 80,
            padding: Padding::default(),
            border: 0,
            children: &[],
        };
        // Two 13 px lines plus padding on the primary (vertical) axis.
        assert_eq!(c.measure_content(&input).size, IntSize::new(80, 34));

        assert_eq!(c.set_date(None), Invalidate::Size);
        assert_eq!(c.measure_content(&input).size, IntSize::new(80, 21));
    }

    #[test]
    fn tooltip_is_optional() {
        let mut c = clock();
        assert_eq!(c.tooltip_text(), None);
        c.set_tooltip(Some("Saturday, 17 October 2026".to_owned()));
        assert_eq!(c.tooltip_text().as_deref(), Some("Saturday, 17 October 2026"));
    }
}
