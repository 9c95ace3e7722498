// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract between the engine and the window system.
//!
//! Shelf does not talk to a display server. Once per frame, after the redraw
//! pass, it hands the composited frame to a [`Presenter`]. The window system
//! integration owns everything after that:
//!
//! - **Presenter**: copies the damaged part of [`Frame::pixmap`] into the
//!   native window (an X11 pixmap, a Wayland buffer, a test image).
//! - **Input**: turns pointer motion into [`node_at`] / [`tooltip_at`]
//!   queries between frames, and widget data changes into invalidations.
//! - **Monitors**: creates one [`PanelWindow`] per output and sizes it with
//!   [`PanelWindow::resize`].
//!
//! [`node_at`]: crate::window::PanelWindow::node_at
//! [`tooltip_at`]: crate::window::PanelWindow::tooltip_at
//! [`PanelWindow`]: crate::window::PanelWindow
//! [`PanelWindow::resize`]: crate::window::PanelWindow::resize

use shelf_render::{DamageRegion, Pixmap};

use crate::output::OutputId;

/// A finished frame, handed to [`Presenter::commit`].
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Monotonic frame counter of the window.
    pub frame_index: u64,
    /// Monitor the window is shown on.
    pub output: OutputId,
    /// The composited window contents, premultiplied RGBA8.
    pub pixmap: &'a Pixmap,
    /// Parts of `pixmap` that changed since the previous frame.
    pub damage: &'a DamageRegion,
}

/// Receives composited frames.
///
/// Called exactly once per frame, after all three passes. Closures taking a
/// `&Frame<'_>` implement this trait, which keeps test doubles short.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_event(event: Event) {
///     match event {
///         Event::BatteryChanged(pct, state) => {
///             window.store_mut().edit::<Battery>(battery, |b| b.set_reading(pct, state));
///         }
///         Event::Resized(size) => window.resize(size),
///         _ => {}
///     }
///     // Runs the passes only when something is dirty.
///     window.tick(&mut presenter);
/// }
/// ```
pub trait Presenter {
    /// Pushes `frame` to the native window.
    fn commit(&mut self, frame: &Frame<'_>);
}

impl<F: FnMut(&Frame<'_>)> Presenter for F {
    fn commit(&mut self, frame: &Frame<'_>) {
        self(frame);
    }
}
