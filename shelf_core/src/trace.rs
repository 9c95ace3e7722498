// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the frame loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! scheduler calls around each pass. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates per-node [`NodeChange`] records
//!   and damage rectangles plus the corresponding `TraceSink` methods.

use crate::output::OutputId;

use shelf_render::IntRect;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which stage of a frame is being reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassKind {
    /// Draining the invalidation inbox into node flags.
    Absorb,
    /// Pass 1: post-order content sizing.
    ContentSizing,
    /// Pass 2: pre-order distribution and positioning.
    LayoutSizing,
    /// Pass 3: pre-order repaint and compositing.
    Redraw,
    /// Handing the frame to the presenter.
    Commit,
}

/// What happened to a node during a frame.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeChangeKind {
    /// Size changed (content sizing or distribution).
    Resized,
    /// Position changed.
    Moved,
    /// Pixel buffer regenerated.
    Painted,
    /// Cached buffer composited onto the frame.
    Composited,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Marks the beginning of a pass.
#[derive(Clone, Copy, Debug)]
pub struct PassBeginEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Which monitor's window.
    pub output: OutputId,
    /// Which pass is starting.
    pub pass: PassKind,
}

/// Marks the end of a pass.
#[derive(Clone, Copy, Debug)]
pub struct PassEndEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Which monitor's window.
    pub output: OutputId,
    /// Which pass is ending.
    pub pass: PassKind,
    /// Nodes the pass acted on (measured, distributed, painted, ...).
    pub touched: u32,
}

/// Counters collected while running the passes of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Nodes whose flags were set from the invalidation inbox.
    pub absorbed: u32,
    /// `ByContent` nodes whose `measure_content` was called.
    pub measured: u32,
    /// `ByLayout` parents that ran the size distributor.
    pub distributed: u32,
    /// Nodes whose size changed.
    pub resized: u32,
    /// Nodes whose position changed.
    pub moved: u32,
    /// Nodes whose pixel buffer was regenerated.
    pub painted: u32,
    /// Buffers composited onto the frame.
    pub composited: u32,
}

/// Per-frame summary emitted after commit.
#[derive(Clone, Copy, Debug)]
pub struct FrameSummary {
    /// Frame counter.
    pub frame_index: u64,
    /// Which monitor's window.
    pub output: OutputId,
    /// Pass counters.
    pub stats: PassStats,
    /// Whether the whole frame was damaged.
    pub full_damage: bool,
    /// Number of damage rectangles (0 when `full_damage`).
    pub damage_rects: u32,
    /// Bounding box of the damage, `None` when nothing changed.
    pub damage_bounds: Option<IntRect>,
}

/// A per-node change record.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeChange {
    /// Slot index of the node.
    pub node_index: u32,
    /// What happened.
    pub kind: NodeChangeKind,
    /// The node's rectangle after the change.
    pub rect: IntRect,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the frame loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called at the beginning of a pass.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called at the end of a pass.
    fn on_pass_end(&mut self, e: &PassEndEvent) {
        _ = e;
    }

    /// Called once per frame after commit.
    fn on_frame_summary(&mut self, s: &FrameSummary) {
        _ = s;
    }

    /// Called with the frame's per-node changes, in the order they happened
    /// (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_node_changes(&mut self, frame_index: u64, changes: &[NodeChange]) {
        _ = (frame_index, changes);
    }

    /// Called with the frame's damage rectangles (requires `trace-rich`
    /// feature).
    #[cfg(feature = "trace-rich")]
    fn on_damage_rects(&mut self, frame_index: u64, rects: &[IntRect]) {
        _ = (frame_index, rects);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassEndEvent`].
    #[inline]
    pub fn pass_end(&mut self, e: &PassEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameSummary`].
    #[inline]
    pub fn frame_summary(&mut self, s: &FrameSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_frame_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }

    /// Emits node changes (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn node_changes(&mut self, frame_index: u64, changes: &[NodeChange]) {
        if let Some(s) = &mut self.sink {
            s.on_node_changes(frame_index, changes);
        }
    }

    /// Emits damage rectangles (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn damage_rects(&mut self, frame_index: u64, rects: &[IntRect]) {
        if let Some(s) = &mut self.sink {
            s.on_damage_rects(frame_index, rects);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
