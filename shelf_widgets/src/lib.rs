// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel widgets for the `shelf_core` engine.
//!
//! Every widget here only formats data it is given: reading the clock,
//! polling the battery, tracking client windows and embedding tray icons
//! happen elsewhere. Widgets turn that data into text and icons, report
//! whether a change needs a repaint or a re-measure, and answer tooltip
//! queries.
//!
//! | widget            | sizing      | role                                      |
//! |-------------------|-------------|-------------------------------------------|
//! | [`Panel`]         | `ByLayout`  | root of a panel window                    |
//! | [`Launcher`]      | `ByContent` | row of [`LauncherIcon`]s                  |
//! | [`Taskbar`]       | `ByLayout`  | tasks of one desktop                      |
//! | [`Task`]          | `ByLayout`  | one client window: icon and title         |
//! | [`Systray`]       | `ByContent` | row of [`TrayIcon`] slots                 |
//! | [`Battery`]       | `ByContent` | `"85%"`, `"85%+"` while charging          |
//! | [`Clock`]         | `ByContent` | time line and optional date line          |
//! | [`Label`]         | `ByContent` | plain text                                |
//! | [`Tooltip`]       | `ByContent` | root of a tooltip window                  |
//!
//! Text goes through a shared [`TextMetrics`] implementation;
//! [`FixedAdvance`] is a font-free one. [`PanelBuilder`] wires the standard
//! layout together.

mod battery;
mod builder;
mod clock;
mod label;
mod launcher;
mod measure;
mod panel;
mod systray;
mod taskbar;
mod text;
mod tooltip;

pub use battery::{Battery, ChargeState};
pub use builder::{PanelBuilder, PanelConfig, PanelNodes};
pub use clock::Clock;
pub use label::{DEFAULT_TEXT_PADDING, Label};
pub use launcher::{Launcher, LauncherEntry, LauncherIcon};
pub use panel::{Panel, Theme, ThemeStyles};
pub use systray::{Placement, Systray, TrayIcon};
pub use taskbar::{Task, TaskPalette, Taskbar, WindowId};
pub use text::{FixedAdvance, TextBlock, TextMetrics};
pub use tooltip::Tooltip;
