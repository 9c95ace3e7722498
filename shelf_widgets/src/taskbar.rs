// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Task list: one taskbar per desktop, one task per window.
//!
//! Both are `ByLayout`: a taskbar gets whatever primary-axis space the panel
//! has left after its content-sized neighbors, and splits it evenly among
//! its tasks. The per-task cap lives in the taskbar node's
//! [`LayoutParams::max_flexible`](shelf_core::layout::LayoutParams), so a
//! lone task does not stretch across the whole screen.

use std::rc::Rc;

use kurbo::Rect;
use shelf_core::widget::{Invalidate, Widget};
use shelf_render::{Canvas, Color, Pixmap};

use crate::text::{TextBlock, TextMetrics};

/// Space between a task's edge and its icon or title.
const TASK_INSET: f64 = 3.0;

/// Identifier of a client window, as given by the window system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

/// Container of the tasks on one desktop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taskbar {
    desktop: u32,
    name: Option<String>,
}

impl Taskbar {
    /// Creates the taskbar for `desktop`.
    #[must_use]
    pub fn new(desktop: u32) -> Self {
        Self {
            desktop,
            name: None,
        }
    }

    /// Desktop index.
    #[must_use]
    pub fn desktop(&self) -> u32 {
        self.desktop
    }

    /// Desktop name, when the window manager publishes one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the desktop name shown as the taskbar's tooltip.
    pub fn set_name(&mut self, name: Option<String>) -> Invalidate {
        self.name = name;
        Invalidate::Nothing
    }
}

impl Widget for Taskbar {
    fn paint(&self, canvas: &mut Canvas) {
        _ = canvas;
    }

    fn tooltip_text(&self) -> Option<String> {
        self.name.clone()
    }
}

/// Overlay colors a task paints on top of its style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TaskPalette {
    /// Overlay for the focused window's task.
    pub active: Color,
    /// Overlay for a window demanding attention. Wins over `active`.
    pub urgent: Color,
}

/// One window in the task list: an optional icon followed by the title.
#[derive(Clone, Debug)]
pub struct Task {
    window: WindowId,
    title: TextBlock,
    icon: Option<Pixmap>,
    palette: TaskPalette,
    active: bool,
    urgent: bool,
}

impl Task {
    /// Creates a task for `window`.
    #[must_use]
    pub fn new(metrics: Rc<dyn TextMetrics>, window: WindowId, title: &str, color: Color) -> Self {
        let mut text = TextBlock::new(metrics, color);
        text.set_lines([title]);
        Self {
            window,
            title: text,
            icon: None,
            palette: TaskPalette::default(),
            active: false,
            urgent: false,
        }
    }

    /// Sets the state overlay colors.
    #[must_use]
    pub fn with_palette(mut self, palette: TaskPalette) -> Self {
        self.palette = palette;
        self
    }

    /// The window this task stands for.
    #[must_use]
    pub fn window(&self) -> WindowId {
        self.window
    }

    /// Window title.
    #[must_use]
    pub fn title(&self) -> String {
        self.title.text()
    }

    /// Whether the window has focus.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the window demands attention.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.urgent
    }

    /// Replaces the title. The task's size is decided by the taskbar, so
    /// only a repaint is needed.
    pub fn set_title(&mut self, title: &str) -> Invalidate {
        if self.title.set_lines([title]) {
            Invalidate::Paint
        } else {
            Invalidate::Nothing
        }
    }

    /// Replaces the icon.
    pub fn set_icon(&mut self, icon: Option<Pixmap>) -> Invalidate {
        if self.icon == icon {
            return Invalidate::Nothing;
        }
        self.icon = icon;
        Invalidate::Paint
    }

    /// Marks the window focused or not.
    pub fn set_active(&mut self, active: bool) -> Invalidate {
        if core::mem::replace(&mut self.active, active) == active {
            Invalidate::Nothing
        } else {
            Invalidate::Paint
        }
    }

    /// Marks the window as demanding attention or not.
    pub fn set_urgent(&mut self, urgent: bool) -> Invalidate {
        if core::mem::replace(&mut self.urgent, urgent) == urgent {
            Invalidate::Nothing
        } else {
            Invalidate::Paint
        }
    }
}

impl Widget for Task {
    fn paint(&self, canvas: &mut Canvas) {
        let bounds = canvas.bounds();
        if self.urgent {
            canvas.fill_rect(bounds, self.palette.urgent);
        } else if self.active {
            canvas.fill_rect(bounds, self.palette.active);
        }

        let mut x = bounds.x0 + TASK_INSET;
        if let Some(icon) = &self.icon {
            let side = (bounds.height() - 2.0 * TASK_INSET).max(0.0);
            let dest = Rect::new(x, TASK_INSET, x + side, TASK_INSET + side);
            canvas.draw_pixmap(icon, dest);
            x += side + TASK_INSET;
        }
        self.title.paint_line_at(canvas, bounds, x);
    }

    fn tooltip_text(&self) -> Option<String> {
        Some(self.title.text())
    }
}
