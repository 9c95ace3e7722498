// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! System tray: square slots for icons drawn by other processes.
//!
//! Tray icons are client windows embedded by the window system; the panel
//! only reserves their space. When layout moves or resizes a slot, the slot
//! queues a [`Placement`] in its systray, and the embedding code drains the
//! queue with [`Systray::take_placements`] after the frame and moves the
//! client windows to match.

use std::cell::RefCell;
use std::rc::Rc;

use shelf_core::widget::{Geometry, MeasureInput, Measured, Widget};
use shelf_render::{Canvas, IntRect};

use crate::measure;
use crate::taskbar::WindowId;

/// Where a tray client window has to go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The embedded client window.
    pub window: WindowId,
    /// Its slot, in panel window coordinates.
    pub rect: IntRect,
}

type Queue = Rc<RefCell<Vec<Placement>>>;

/// Container of [`TrayIcon`] slots, exactly long enough to fit them.
#[derive(Debug, Default)]
pub struct Systray {
    queue: Queue,
    rect: IntRect,
}

impl Systray {
    /// Creates an empty systray.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot for `window` that reports to this systray.
    ///
    /// The slot still has to be added as a child of the systray's node.
    #[must_use]
    pub fn icon(&self, window: WindowId) -> TrayIcon {
        TrayIcon {
            window,
            queue: Rc::clone(&self.queue),
        }
    }

    /// The systray's own rectangle as of the last layout change.
    #[must_use]
    pub fn rect(&self) -> IntRect {
        self.rect
    }

    /// Drains the placements queued since the last call, oldest first.
    pub fn take_placements(&mut self) -> Vec<Placement> {
        core::mem::take(&mut *self.queue.borrow_mut())
    }
}

impl Widget for Systray {
    fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
        measure::row(input)
    }

    fn paint(&self, canvas: &mut Canvas) {
        _ = canvas;
    }

    fn on_layout_changed(&mut self, geometry: &Geometry<'_>) {
        self.rect = geometry.rect;
    }
}

/// A square slot for one embedded tray client.
#[derive(Debug)]
pub struct TrayIcon {
    window: WindowId,
    queue: Queue,
}

impl TrayIcon {
    /// The embedded client window.
    #[must_use]
    pub fn window(&self) -> WindowId {
        self.window
    }
}

impl Widget for TrayIcon {
    fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
        measure::square(input)
    }

    fn paint(&self, canvas: &mut Canvas) {
        _ = canvas;
    }

    fn on_layout_changed(&mut self, geometry: &Geometry<'_>) {
        let placement = Placement {
            window: self.window,
            rect: geometry.rect,
        };
        let mut queue = self.queue.borrow_mut();
        // Only the latest rectangle of a window matters.
        queue.retain(|p| p.window != self.window);
        queue.push(placement);
    }
}
