// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Battery charge indicator.

use core::fmt;
use std::rc::Rc;

use shelf_core::widget::{Invalidate, MeasureInput, Measured, Widget};
use shelf_render::{Canvas, Color};

use crate::label::DEFAULT_TEXT_PADDING;
use crate::measure;
use crate::text::{TextBlock, TextMetrics};

/// Charging state reported by the power supply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChargeState {
    /// No reading yet, or the supply did not say.
    #[default]
    Unknown,
    /// Plugged in and charging.
    Charging,
    /// Running on battery.
    Discharging,
    /// Plugged in and full.
    Full,
}

impl fmt::Display for ChargeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "Unknown",
            Self::Charging => "Charging",
            Self::Discharging => "Discharging",
            Self::Full => "Full",
        })
    }
}

/// A `ByContent` leaf showing the charge as `"85%"`, or `"85%+"` while
/// charging.
#[derive(Clone, Debug)]
pub struct Battery {
    text: TextBlock,
    percentage: u8,
    state: ChargeState,
    padding: u32,
}

impl Battery {
    /// Creates an indicator with no reading.
    #[must_use]
    pub fn new(metrics: Rc<dyn TextMetrics>, color: Color) -> Self {
        let mut battery = Self {
            text: TextBlock::new(metrics, color),
            percentage: 0,
            state: ChargeState::Unknown,
            padding: DEFAULT_TEXT_PADDING,
        };
        battery.text.set_text(&battery.label());
        battery
    }

    /// Charge in percent, `0..=100`.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Charging state.
    #[must_use]
    pub fn state(&self) -> ChargeState {
        self.state
    }

    /// The text shown in the panel.
    #[must_use]
    pub fn label(&self) -> String {
        match self.state {
            ChargeState::Charging => format!("{}%+", self.percentage),
            _ => format!("{}%", self.percentage),
        }
    }

    /// Applies a new reading. Percentages above 100 are clamped.
    ///
    /// Returns [`Invalidate::Size`] when the label text changes and
    /// [`Invalidate::Nothing`] otherwise (the tooltip is computed on demand).
    pub fn set_reading(&mut self, percentage: u8, state: ChargeState) -> Invalidate {
        self.percentage = percentage.min(100);
        self.state = state;
        if self.text.set_text(&self.label()) {
            Invalidate::Size
        } else {
            Invalidate::Nothing
        }
    }
}

impl Widget for Battery {
    fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
        measure::strip(input, self.text.size(), self.padding)
    }

    fn paint(&self, canvas: &mut Canvas) {
        let bounds = canvas.bounds();
        self.text.paint_centered(canvas, bounds);
    }

    fn tooltip_text(&self) -> Option<String> {
        Some(format!("{}: {}%", self.state, self.percentage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedAdvance;

    fn battery() -> Battery {
        Battery::new(Rc::new(FixedAdvance::default()), Color::WHITE)
    }

    #[test]
    fn label_marks_charging() {
        let mut b = battery();
        assert_eq!(b.set_reading(85, ChargeState::Discharging), Invalidate::Size);
        assert_eq!(b.label(), "85%");
        assert_eq!(b.set_reading(85, ChargeState::Charging), Invalidate::Size);
        assert_eq!(b.label(), "85%+");
        assert_eq!(b.set_reading(150, ChargeState::Full), Invalidate::Size);
        assert_eq!(b.label(), "100%");
    }

    #[test]
    fn unchanged_label_is_not_an_invalidation() {
        let mut b = battery();
        b.set_reading(40, ChargeState::Discharging);
        // Same text: only the tooltip differs.
        assert_eq!(b.set_reading(40, ChargeState::Unknown), Invalidate::Nothing);
        assert_eq!(b.tooltip_text().as_deref(), Some("Unknown: 40%"));
        b.set_reading(40, ChargeState::Discharging);
        assert_eq!(b.tooltip_text().as_deref(), Some("Discharging: 40%"));
    }
}
