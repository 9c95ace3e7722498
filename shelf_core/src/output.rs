// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monitor identification.
//!
//! A panel puts one top-level window on each monitor. [`OutputId`] names the
//! monitor a [`PanelWindow`](crate::window::PanelWindow) belongs to. The
//! window system assigns these; the engine treats them as opaque.

use core::fmt;

/// Identifies the monitor a panel window is shown on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OutputId(pub u32);

impl fmt::Debug for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutputId({})", self.0)
    }
}
