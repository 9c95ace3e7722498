// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The panel root widget and the panel theme.

use shelf_core::style::{Style, StyleId, StyleRegistry};
use shelf_core::widget::Widget;
use shelf_render::{Canvas, Color};

use crate::taskbar::TaskPalette;

/// Root of a panel window. Paints nothing beyond its style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Panel;

impl Widget for Panel {
    fn paint(&self, canvas: &mut Canvas) {
        _ = canvas;
    }
}

/// Colors and styles of every part of a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Panel background.
    pub panel: Style,
    /// Background behind each desktop's tasks.
    pub taskbar: Style,
    /// Background of one task.
    pub task: Style,
    /// Background behind the launcher icons.
    pub launcher: Style,
    /// Background behind the tray icons.
    pub systray: Style,
    /// Clock background.
    pub clock: Style,
    /// Battery background.
    pub battery: Style,
    /// Tooltip window background and border.
    pub tooltip: Style,
    /// Text color.
    pub text: Color,
    /// Task state overlays.
    pub task_palette: TaskPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel: Style::filled(Color::from_rgb8(0x20, 0x22, 0x28)),
            taskbar: Style::NONE,
            task: Style::filled(Color::from_rgb8(0x30, 0x33, 0x3b)).with_border(
                Color::TRANSPARENT,
                0,
                3,
            ),
            launcher: Style::NONE,
            systray: Style::NONE,
            clock: Style::NONE,
            battery: Style::NONE,
            tooltip: Style::filled(Color::from_rgb8(0x10, 0x10, 0x10)).with_border(
                Color::from_rgb8(0x60, 0x60, 0x60),
                1,
                0,
            ),
            text: Color::from_rgb8(0xe0, 0xe0, 0xe0),
            task_palette: TaskPalette {
                active: Color::from_rgba8(0xff, 0xff, 0xff, 0x30),
                urgent: Color::from_rgba8(0xd0, 0x40, 0x30, 0xc0),
            },
        }
    }
}

/// Registry handles of a [`Theme`]'s styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeStyles {
    /// See [`Theme::panel`].
    pub panel: StyleId,
    /// See [`Theme::taskbar`].
    pub taskbar: StyleId,
    /// See [`Theme::task`].
    pub task: StyleId,
    /// See [`Theme::launcher`].
    pub launcher: StyleId,
    /// See [`Theme::systray`].
    pub systray: StyleId,
    /// See [`Theme::clock`].
    pub clock: StyleId,
    /// See [`Theme::battery`].
    pub battery: StyleId,
    /// See [`Theme::tooltip`].
    pub tooltip: StyleId,
}

impl Theme {
    /// Registers every style of the theme.
    pub fn register(&self, registry: &mut StyleRegistry) -> ThemeStyles {
        ThemeStyles {
            panel: registry.register(self.panel),
            taskbar: registry.register(self.taskbar),
            task: registry.register(self.task),
            launcher: registry.register(self.launcher),
            systray: registry.register(self.systray),
            clock: registry.register(self.clock),
            battery: registry.register(self.battery),
            tooltip: registry.register(self.tooltip),
        }
    }
}
