// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use shelf_core::trace::{
    FrameSummary, NodeChange, NodeChangeKind, PassBeginEvent, PassEndEvent, PassKind, TraceSink,
};
use shelf_render::IntRect;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    node_changes: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("node_changes", &self.node_changes)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            node_changes: false,
        }
    }

    /// Also writes one line per node change instead of only their count.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.node_changes = true;
        self
    }

    /// Returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn pass_name(pass: PassKind) -> &'static str {
    match pass {
        PassKind::Absorb => "absorb",
        PassKind::ContentSizing => "measure",
        PassKind::LayoutSizing => "arrange",
        PassKind::Redraw => "redraw",
        PassKind::Commit => "commit",
    }
}

fn change_name(kind: NodeChangeKind) -> &'static str {
    match kind {
        NodeChangeKind::Resized => "resized",
        NodeChangeKind::Moved => "moved",
        NodeChangeKind::Painted => "painted",
        NodeChangeKind::Composited => "composited",
    }
}

fn rect(r: &IntRect) -> String {
    format!(
        "{},{} {}x{}",
        r.origin.x, r.origin.y, r.size.width, r.size.height
    )
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] frame={} output={} {}",
            e.frame_index,
            e.output.0,
            pass_name(e.pass),
        );
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:end] frame={} output={} {} touched={}",
            e.frame_index,
            e.output.0,
            pass_name(e.pass),
            e.touched,
        );
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        let mut damage = if s.full_damage {
            "full".to_owned()
        } else {
            format!("{} rects", s.damage_rects)
        };
        if let Some(bounds) = &s.damage_bounds {
            damage = format!("{damage} @{}", rect(bounds));
        }
        let st = &s.stats;
        let _ = writeln!(
            self.writer,
            "[summary] frame={} output={} measured={} distributed={} resized={} \
             moved={} painted={} composited={} damage={damage}",
            s.frame_index,
            s.output.0,
            st.measured,
            st.distributed,
            st.resized,
            st.moved,
            st.painted,
            st.composited,
        );
    }

    fn on_node_changes(&mut self, frame_index: u64, changes: &[NodeChange]) {
        let _ = writeln!(
            self.writer,
            "[nodes] frame={frame_index} changes={}",
            changes.len(),
        );
        if self.node_changes {
            for c in changes {
                let _ = writeln!(
                    self.writer,
                    "  #{} {} {}",
                    c.node_index,
                    change_name(c.kind),
                    rect(&c.rect),
                );
            }
        }
    }

    fn on_damage_rects(&mut self, frame_index: u64, rects: &[IntRect]) {
        let list: Vec<String> = rects.iter().map(rect).collect();
        let _ = writeln!(
            self.writer,
            "[damage] frame={frame_index} rects={} [{}]",
            rects.len(),
            list.join("; "),
        );
    }
}
