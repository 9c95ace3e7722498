// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained layout and redraw engine for desktop panels.
//!
//! `shelf_core` keeps the widgets of a panel (clock, battery, task list,
//! system tray, launcher) in a tree of rectangles per monitor window. It
//! negotiates sizes bottom-up, computes positions top-down, and regenerates
//! only the pixel buffers that actually changed, before handing the
//! composited frame to the window system.
//!
//! # Architecture
//!
//! ```text
//!   widget data changes ──► NodeStore::mark_dirty_* / edit ──► dirty inbox
//!                                                                  │
//!                 ┌────────────────────────────────────────────────┘
//!                 ▼
//!   PanelWindow::tick() ──► absorb ──► measure ──► arrange ──► redraw
//!                                                                  │
//!                 ┌────────────────────────────────────────────────┘
//!                 ▼
//!   Presenter::commit(&Frame) ──► native window
//! ```
//!
//! **[`node`]**: struct-of-arrays node tree with generational handles, the
//! passes that lay it out and paint it, and hit testing.
//!
//! **[`widget`]**: the [`Widget`](widget::Widget) trait each widget kind
//! implements: `measure_content`, `paint`, `on_layout_changed`,
//! `tooltip_text`.
//!
//! **[`layout`]**: sizing modes, orientation, padding, and the pure size
//! distributor that splits free space among flexible siblings.
//!
//! **[`style`]**: shared background/border records.
//!
//! **[`dirty`]**: channels of the invalidation inbox, backed by
//! `understory_dirty`.
//!
//! **[`scheduler`]** and **[`window`]**: frame orchestration, one
//! [`PanelWindow`](window::PanelWindow) per monitor.
//!
//! **[`backend`]**: the [`Presenter`](backend::Presenter) contract with the
//! window system.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! frame instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-node
//!   change and damage-rect events.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod backend;
pub mod dirty;
pub mod layout;
pub mod node;
pub mod output;
pub mod scheduler;
pub mod style;
pub mod trace;
pub mod widget;
pub mod window;
