// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame orchestration.
//!
//! The [`Scheduler`] runs one frame of one window: it absorbs queued
//! invalidations, runs the content sizing, layout sizing and redraw passes
//! back to back, commits the result to a [`Presenter`], and reports what
//! happened through a [`FrameReport`] and the optional [`Tracer`].

use shelf_render::{DamageRegion, IntPoint, IntRect, Pixmap};

use crate::backend::{Frame, Presenter};
use crate::layout::LayoutContext;
use crate::node::{FrameState, NodeId, NodeStore};
use crate::output::OutputId;
use crate::trace::{FrameSummary, PassBeginEvent, PassEndEvent, PassKind, PassStats, Tracer};

/// What one frame did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// Frame counter.
    pub frame_index: u64,
    /// Monitor of the window.
    pub output: OutputId,
    /// Pass counters.
    pub stats: PassStats,
    /// Region of the frame that changed.
    pub damage: DamageRegion,
}

/// Runs frames for one window.
#[derive(Clone, Debug)]
pub struct Scheduler {
    output: OutputId,
    ctx: LayoutContext,
    frame_index: u64,
}

impl Scheduler {
    /// Creates a scheduler for the window on `output`.
    #[must_use]
    pub fn new(output: OutputId, ctx: LayoutContext) -> Self {
        Self {
            output,
            ctx,
            frame_index: 0,
        }
    }

    /// Monitor of the window this scheduler drives.
    #[must_use]
    pub fn output(&self) -> OutputId {
        self.output
    }

    /// The layout context passed to every pass.
    #[must_use]
    pub fn context(&self) -> LayoutContext {
        self.ctx
    }

    /// Replaces the layout context used from the next frame on.
    pub fn set_context(&mut self, ctx: LayoutContext) {
        self.ctx = ctx;
    }

    /// Index the next frame will carry.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Runs one frame of the tree rooted at `root` into `frame`.
    ///
    /// `frame` is reallocated when it does not match the root's size after
    /// layout, which also makes the damage [`Full`](DamageRegion::Full), as
    /// does `full_damage`.
    pub fn run(
        &mut self,
        store: &mut NodeStore,
        root: NodeId,
        frame: &mut Pixmap,
        full_damage: bool,
        presenter: &mut dyn Presenter,
        tracer: &mut Tracer<'_>,
    ) -> FrameReport {
        let frame_index = self.frame_index;
        self.frame_index += 1;
        let ctx = self.ctx;
        let mut state = FrameState::new();

        self.begin(tracer, frame_index, PassKind::Absorb);
        store.absorb(&mut state);
        self.end(tracer, frame_index, PassKind::Absorb, state.stats.absorbed);

        self.begin(tracer, frame_index, PassKind::ContentSizing);
        store.measure(root, ctx, &mut state);
        self.end(tracer, frame_index, PassKind::ContentSizing, state.stats.measured);

        self.begin(tracer, frame_index, PassKind::LayoutSizing);
        store.arrange(root, ctx, &mut state);
        self.end(
            tracer,
            frame_index,
            PassKind::LayoutSizing,
            state.stats.distributed + state.stats.moved,
        );

        let mut full_damage = full_damage;
        let root_size = store.size(root);
        if frame.size() != root_size {
            *frame = Pixmap::new(root_size);
            full_damage = true;
        }

        self.begin(tracer, frame_index, PassKind::Redraw);
        store.redraw(root, frame, &mut state);
        self.end(tracer, frame_index, PassKind::Redraw, state.stats.painted);

        if full_damage {
            state.damage = DamageRegion::Full;
        }

        self.begin(tracer, frame_index, PassKind::Commit);
        presenter.commit(&Frame {
            frame_index,
            output: self.output,
            pixmap: &*frame,
            damage: &state.damage,
        });
        self.end(tracer, frame_index, PassKind::Commit, 1);

        #[cfg(feature = "trace-rich")]
        {
            tracer.node_changes(frame_index, &state.changes);
            if let DamageRegion::Rects(rects) = &state.damage {
                tracer.damage_rects(frame_index, rects);
            }
        }

        let (full, rects) = match &state.damage {
            DamageRegion::Full => (true, 0),
            DamageRegion::Rects(r) => (false, u32::try_from(r.len()).unwrap_or(u32::MAX)),
            DamageRegion::None => (false, 0),
        };
        tracer.frame_summary(&FrameSummary {
            frame_index,
            output: self.output,
            stats: state.stats,
            full_damage: full,
            damage_rects: rects,
            damage_bounds: state.damage.bounds(IntRect::new(IntPoint::ZERO, frame.size())),
        });

        FrameReport {
            frame_index,
            output: self.output,
            stats: state.stats,
            damage: state.damage,
        }
    }

    fn begin(&self, tracer: &mut Tracer<'_>, frame_index: u64, pass: PassKind) {
        tracer.pass_begin(&PassBeginEvent {
            frame_index,
            output: self.output,
            pass,
        });
    }

    fn end(&self, tracer: &mut Tracer<'_>, frame_index: u64, pass: PassKind, touched: u32) {
        tracer.pass_end(&PassEndEvent {
            frame_index,
            output: self.output,
            pass,
            touched,
        });
    }
}

#[cfg(test)]
mod tests {
    use shelf_render::IntSize;

    use super::*;
    use crate::layout::SizingMode;
    use crate::widget::Blank;

    fn setup() -> (NodeStore, NodeId) {
        let mut store = NodeStore::default();
        let root = store.create_node(Blank, SizingMode::ByLayout);
        store.set_root_size(root, IntSize::new(30, 10));
        let child = store.create_node(Blank, SizingMode::ByLayout);
        store.add_child(root, child);
        (store, root)
    }

    #[test]
    fn frames_are_numbered_and_committed_once() {
        let (mut store, root) = setup();
        let mut scheduler = Scheduler::new(OutputId(2), LayoutContext::HORIZONTAL);
        let mut frame = Pixmap::new(IntSize::ZERO);
        let mut commits = Vec::new();
        let mut presenter = |f: &Frame<'_>| commits.push((f.frame_index, f.output, f.pixmap.size()));

        let first = scheduler.run(&mut store, root, &mut frame, false, &mut presenter, &mut Tracer::none());
        let second = scheduler.run(&mut store, root, &mut frame, false, &mut presenter, &mut Tracer::none());

        assert_eq!(first.frame_index, 0);
        assert_eq!(second.frame_index, 1);
        assert_eq!(first.damage, DamageRegion::Full, "frame was reallocated");
        assert!(second.damage.is_empty());
        assert_eq!(
            commits,
            vec![
                (0, OutputId(2), IntSize::new(30, 10)),
                (1, OutputId(2), IntSize::new(30, 10)),
            ]
        );
    }

    #[cfg(feature = "trace")]
    #[test]
    fn passes_are_traced_in_order() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Passes {
            seen: Vec<PassKind>,
            summaries: u32,
        }
        impl TraceSink for Passes {
            fn on_pass_begin(&mut self, e: &PassBeginEvent) {
                self.seen.push(e.pass);
            }
            fn on_frame_summary(&mut self, _s: &FrameSummary) {
                self.summaries += 1;
            }
        }

        let (mut store, root) = setup();
        let mut scheduler = Scheduler::new(OutputId(0), LayoutContext::HORIZONTAL);
        let mut frame = Pixmap::new(IntSize::new(30, 10));
        let mut sink = Passes::default();
        let mut tracer = Tracer::new(&mut sink);
        scheduler.run(&mut store, root, &mut frame, false, &mut |_: &Frame<'_>| {}, &mut tracer);
        drop(tracer);

        assert_eq!(
            sink.seen,
            vec![
                PassKind::Absorb,
                PassKind::ContentSizing,
                PassKind::LayoutSizing,
                PassKind::Redraw,
                PassKind::Commit,
            ]
        );
        assert_eq!(sink.summaries, 1);
    }

    #[cfg(feature = "trace-rich")]
    #[test]
    fn composite_order_is_recorded() {
        use crate::trace::{NodeChange, NodeChangeKind, TraceSink};

        #[derive(Default)]
        struct Changes(Vec<NodeChange>);
        impl TraceSink for Changes {
            fn on_node_changes(&mut self, _frame_index: u64, changes: &[NodeChange]) {
                self.0.extend_from_slice(changes);
            }
        }

        let mut store = NodeStore::default();
        let root = store.create_node(Blank, SizingMode::ByLayout);
        store.set_root_size(root, IntSize::new(30, 10));
        let c1 = store.create_node(Blank, SizingMode::ByLayout);
        let c2 = store.create_node(Blank, SizingMode::ByLayout);
        store.add_child(root, c1);
        store.add_child(root, c2);

        let mut scheduler = Scheduler::new(OutputId(0), LayoutContext::HORIZONTAL);
        let mut frame = Pixmap::new(IntSize::new(30, 10));
        let mut sink = Changes::default();
        let mut tracer = Tracer::new(&mut sink);
        scheduler.run(&mut store, root, &mut frame, false, &mut |_: &Frame<'_>| {}, &mut tracer);
        drop(tracer);

        let composited: Vec<_> = sink
            .0
            .iter()
            .filter(|c| c.kind == NodeChangeKind::Composited)
            .map(|c| c.node_index)
            .collect();
        assert_eq!(composited, vec![root.index(), c1.index(), c2.index()]);
    }
}
