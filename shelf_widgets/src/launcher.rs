// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Application launcher: a row of square icons.

use kurbo::Rect;
use shelf_core::widget::{Invalidate, MeasureInput, Measured, Widget};
use shelf_render::{Canvas, Pixmap};

use crate::measure;

/// Container of [`LauncherIcon`]s, exactly long enough to fit them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Launcher;

impl Widget for Launcher {
    fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
        measure::row(input)
    }

    fn paint(&self, canvas: &mut Canvas) {
        _ = canvas;
    }
}

/// What a launcher icon starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LauncherEntry {
    /// Human-readable application name.
    pub name: String,
    /// Command line handed to the process launcher.
    pub command: String,
}

impl LauncherEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// A square icon as thick as the launcher's interior.
#[derive(Clone, Debug)]
pub struct LauncherIcon {
    entry: LauncherEntry,
    icon: Option<Pixmap>,
    inset: u32,
}

impl LauncherIcon {
    /// Creates an icon for `entry` with no image yet.
    #[must_use]
    pub fn new(entry: LauncherEntry) -> Self {
        Self {
            entry,
            icon: None,
            inset: 1,
        }
    }

    /// The entry this icon launches.
    #[must_use]
    pub fn entry(&self) -> &LauncherEntry {
        &self.entry
    }

    /// Command line to run when clicked.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.entry.command
    }

    /// Replaces the image. Missing images draw nothing.
    pub fn set_icon(&mut self, icon: Option<Pixmap>) -> Invalidate {
        if self.icon == icon {
            return Invalidate::Nothing;
        }
        self.icon = icon;
        Invalidate::Paint
    }
}

impl Widget for LauncherIcon {
    fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
        measure::square(input)
    }

    fn paint(&self, canvas: &mut Canvas) {
        let Some(icon) = &self.icon else {
            return;
        };
        let inset = f64::from(self.inset);
        let b = canvas.bounds();
        canvas.draw_pixmap(icon, Rect::new(b.x0 + inset, b.y0 + inset, b.x1 - inset, b.y1 - inset));
    }

    fn tooltip_text(&self) -> Option<String> {
        Some(format!("{} ({})", self.entry.name, self.entry.command))
    }
}
