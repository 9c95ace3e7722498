// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame passes: absorb, content sizing, layout sizing, redraw.
//!
//! Each pass is a single traversal over the visible part of one tree and
//! always runs to completion. Hidden nodes and their subtrees are skipped by
//! every pass; their flags wait until they are shown again.
//!
//! Sizes are unsigned and every subtraction saturates, so degenerate inputs
//! (a panel narrower than its padding) give empty geometry instead of
//! wrapping.

use shelf_render::{Canvas, DamageRegion, IntPoint, IntRect, Pixmap};

use super::id::{INVALID, NodeId};
use super::store::NodeStore;
use crate::dirty;
use crate::layout::{DistributionInput, LayoutContext, SizingMode, distribute};
use crate::trace::PassStats;
use crate::widget::{Geometry, MeasureInput};

#[cfg(feature = "trace-rich")]
use crate::trace::{NodeChange, NodeChangeKind};

/// Mutable state threaded through the passes of one frame.
#[derive(Debug, Default)]
pub struct FrameState {
    /// Counters for the frame report.
    pub stats: PassStats,
    /// Rectangles of the nodes repainted this frame.
    pub damage: DamageRegion,
    /// Per-node records, in the order they happened.
    #[cfg(feature = "trace-rich")]
    pub changes: Vec<NodeChange>,
}

impl FrameState {
    /// Creates an empty frame state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(feature = "trace-rich")]
    fn record(&mut self, node_index: u32, kind: NodeChangeKind, rect: IntRect) {
        self.changes.push(NodeChange {
            node_index,
            kind,
            rect,
        });
    }
}

/// Converts an extent to a signed coordinate delta, saturating.
fn signed(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

impl NodeStore {
    /// Moves queued invalidations into node flags.
    ///
    /// Clears every node's `changed_this_pass` first, then drains the
    /// `SIZE`, `PAINT` and `TOPOLOGY` channels in deterministic order. Keys
    /// of nodes destroyed after being marked are ignored. A paint
    /// invalidation releases the node's pixel buffer.
    pub fn absorb(&mut self, state: &mut FrameState) {
        self.changed.fill(false);
        self.frame_requested = false;

        let sized: Vec<u32> = self.dirty.drain(dirty::SIZE).deterministic().run().collect();
        let painted: Vec<u32> = self
            .dirty
            .drain(dirty::PAINT)
            .deterministic()
            .run()
            .collect();
        let topology: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();

        for &idx in sized.iter().chain(&topology) {
            if self.is_live_slot(idx) {
                self.dirty_size[idx as usize] = true;
                state.stats.absorbed += 1;
            }
        }
        for &idx in painted.iter().chain(&topology) {
            if self.is_live_slot(idx) {
                self.dirty_paint[idx as usize] = true;
                self.pixmap[idx as usize] = None;
                state.stats.absorbed += 1;
            }
        }
    }

    /// Pass 1: content sizing, children before parents.
    ///
    /// A `ByContent` node is measured when its size flag is set or when the
    /// cross extent offered by its parent differs from the one it was last
    /// measured against; the flag is cleared whatever the outcome. A changed
    /// size is stored, flags the parent's size, and sets the node's
    /// `changed_this_pass`.
    ///
    /// # Panics
    ///
    /// Panics if `root` is stale.
    pub fn measure(&mut self, root: NodeId, ctx: LayoutContext, state: &mut FrameState) {
        self.validate(root);
        let offered = ctx.orientation.cross(self.size[root.idx as usize]);
        self.measure_node(root.idx, offered, ctx, state);
    }

    fn measure_node(&mut self, idx: u32, offered: u32, ctx: LayoutContext, state: &mut FrameState) {
        let i = idx as usize;
        if !self.visible[i] {
            return;
        }

        let border = self.border_at(idx);
        let padding = self.params[i].padding;
        let interior = offered.saturating_sub(padding.cross.saturating_add(border).saturating_mul(2));

        let mut child = self.first_child[i];
        while child != INVALID {
            self.measure_node(child, interior, ctx, state);
            child = self.next_sibling[child as usize];
        }

        if self.sizing[i] != SizingMode::ByContent {
            return;
        }
        // A root is offered its own size, so only a parent's offer counts.
        let reoffered = self.parent[i] != INVALID && self.measured_cross[i] != offered;
        if !(self.dirty_size[i] || reoffered) {
            return;
        }

        let mut children = Vec::new();
        let mut child = self.first_child[i];
        while child != INVALID {
            if self.visible[child as usize] {
                children.push(self.size[child as usize]);
            }
            child = self.next_sibling[child as usize];
        }
        let input = MeasureInput {
            current: self.size[i],
            orientation: ctx.orientation,
            cross: offered,
            padding,
            border,
            children: &children,
        };
        let Some(widget) = self.widget[i].as_mut() else {
            return;
        };
        let measured = widget.measure_content(&input);
        self.dirty_size[i] = false;
        self.measured_cross[i] = offered;
        state.stats.measured += 1;

        if measured.changed {
            self.size[i] = measured.size;
            self.changed[i] = true;
            state.stats.resized += 1;
            let p = self.parent[i];
            if p != INVALID {
                self.dirty_size[p as usize] = true;
            }
            #[cfg(feature = "trace-rich")]
            state.record(idx, NodeChangeKind::Resized, self.rect_at(idx));
        }
    }

    /// Pass 2: distribution and positioning, parents before children.
    ///
    /// A `ByLayout` node with its size flag set splits its free primary-axis
    /// space among its visible `ByLayout` children, then every visible node
    /// positions its visible children one after another along the primary
    /// axis, centered on the cross axis. A node whose own geometry changed,
    /// or one of whose direct children did, gets its paint flag set and its
    /// widget's `on_layout_changed` hook called.
    ///
    /// The root is pinned to the window origin.
    ///
    /// # Panics
    ///
    /// Panics if `root` is stale.
    pub fn arrange(&mut self, root: NodeId, ctx: LayoutContext, state: &mut FrameState) {
        self.validate(root);
        let r = root.idx as usize;
        if self.position[r] != IntPoint::ZERO {
            self.position[r] = IntPoint::ZERO;
            self.changed[r] = true;
            state.stats.moved += 1;
        }
        self.arrange_node(root.idx, ctx, state);
    }

    fn arrange_node(&mut self, idx: u32, ctx: LayoutContext, state: &mut FrameState) {
        let i = idx as usize;
        if !self.visible[i] {
            return;
        }
        let o = ctx.orientation;
        let border = self.border_at(idx);
        let params = self.params[i];
        let pad = params.padding;

        if self.dirty_size[i] && self.sizing[i] == SizingMode::ByLayout {
            self.distribute_children(idx, ctx, state);
            self.dirty_size[i] = false;
            state.stats.distributed += 1;
        }

        let origin = self.position[i];
        let parent_cross = i64::from(o.cross(self.size[i]));
        let cross_origin = o.cross_pos(origin);
        let mut running = o
            .main_pos(origin)
            .saturating_add(signed(pad.outer))
            .saturating_add(signed(border));

        let mut rects = Vec::new();
        let mut child_changed = false;
        let mut child = self.first_child[i];
        while child != INVALID {
            let cur = child;
            let c = cur as usize;
            child = self.next_sibling[c];
            if !self.visible[c] {
                continue;
            }
            let size = self.size[c];
            let offset = (parent_cross - i64::from(o.cross(size))) / 2;
            let offset = i32::try_from(offset).unwrap_or(if offset < 0 { i32::MIN } else { i32::MAX });
            let pos = o.point(running, cross_origin.saturating_add(offset));
            if pos != self.position[c] {
                self.position[c] = pos;
                self.changed[c] = true;
                state.stats.moved += 1;
                #[cfg(feature = "trace-rich")]
                state.record(cur, NodeChangeKind::Moved, IntRect::new(pos, size));
            }
            child_changed |= self.changed[c];
            rects.push(IntRect::new(pos, size));
            running = running
                .saturating_add(signed(o.main(size)))
                .saturating_add(signed(pad.gap));
        }

        if self.changed[i] || child_changed {
            self.dirty_paint[i] = true;
            self.pixmap[i] = None;
            let geometry = Geometry {
                rect: self.rect_at(idx),
                children: &rects,
                orientation: o,
            };
            if let Some(widget) = self.widget[i].as_mut() {
                widget.on_layout_changed(&geometry);
            }
        }

        let mut child = self.first_child[i];
        while child != INVALID {
            self.arrange_node(child, ctx, state);
            child = self.next_sibling[child as usize];
        }
    }

    /// Runs the size distributor for the visible children of `idx`.
    fn distribute_children(&mut self, idx: u32, ctx: LayoutContext, state: &mut FrameState) {
        let i = idx as usize;
        let o = ctx.orientation;
        let border = self.border_at(idx);
        let params = self.params[i];
        let pad = params.padding;

        let mut fixed = Vec::new();
        let mut flexible = Vec::new();
        let mut child = self.first_child[i];
        while child != INVALID {
            let c = child as usize;
            if self.visible[c] {
                match self.sizing[c] {
                    SizingMode::ByContent => fixed.push(o.main(self.size[c])),
                    SizingMode::ByLayout => flexible.push(child),
                }
            }
            child = self.next_sibling[c];
        }

        let available = o
            .main(self.size[i])
            .saturating_sub(pad.outer.saturating_add(border).saturating_mul(2));
        let interior_cross = o
            .cross(self.size[i])
            .saturating_sub(pad.cross.saturating_add(border).saturating_mul(2));
        let dist = distribute(&DistributionInput {
            available,
            fixed: &fixed,
            flexible: flexible.len(),
            gap: pad.gap,
            max_flexible: params.max_flexible,
        });

        for (&c, &main) in flexible.iter().zip(&dist.sizes) {
            let ci = c as usize;
            let size = o.size(main, interior_cross);
            if size != self.size[ci] {
                self.size[ci] = size;
                self.changed[ci] = true;
                state.stats.resized += 1;
                #[cfg(feature = "trace-rich")]
                state.record(c, NodeChangeKind::Resized, self.rect_at(c));
            }
            if self.first_child[ci] != INVALID {
                self.dirty_size[ci] = true;
            }
        }
    }

    /// Pass 3: repaint dirty nodes and composite the frame, parents first.
    ///
    /// `frame` is cleared, then every visible node's cached buffer is
    /// composited at its position, in pre-order so children land on top of
    /// their parent and later siblings on top of earlier ones. A node with
    /// its paint flag set first gets a fresh buffer with its style and then
    /// its widget painted into it, and its rectangle is added to the frame's
    /// damage. Zero-sized nodes have no buffer and paint nothing.
    ///
    /// # Panics
    ///
    /// Panics if `root` is stale.
    pub fn redraw(&mut self, root: NodeId, frame: &mut Pixmap, state: &mut FrameState) {
        self.validate(root);
        frame.clear();
        self.redraw_node(root.idx, frame, state);
    }

    fn redraw_node(&mut self, idx: u32, frame: &mut Pixmap, state: &mut FrameState) {
        let i = idx as usize;
        if !self.visible[i] {
            return;
        }

        if self.dirty_paint[i] {
            self.dirty_paint[i] = false;
            let size = self.size[i];
            if self.pixmap[i].as_ref().is_none_or(|p| p.size() != size) {
                self.pixmap[i] = (!size.is_empty()).then(|| Pixmap::new(size));
            }
            if let (Some(pixmap), Some(mut canvas)) = (self.pixmap[i].as_mut(), Canvas::new(size)) {
                let style = *self.styles.get(self.style[i]);
                style.paint(&mut canvas);
                if let Some(widget) = self.widget[i].as_ref() {
                    widget.paint(&mut canvas);
                }
                canvas.finish_into(pixmap);
                state.stats.painted += 1;
                let rect = IntRect::new(self.position[i], size);
                state.damage.add_rect(rect);
                #[cfg(feature = "trace-rich")]
                state.record(idx, NodeChangeKind::Painted, rect);
            }
        }

        if let Some(pixmap) = self.pixmap[i].as_ref() {
            frame.composite_over(pixmap, self.position[i]);
            state.stats.composited += 1;
            #[cfg(feature = "trace-rich")]
            state.record(idx, NodeChangeKind::Composited, self.rect_at(idx));
        }

        let mut child = self.first_child[i];
        while child != INVALID {
            self.redraw_node(child, frame, state);
            child = self.next_sibling[child as usize];
        }
    }

    /// Whether `idx` is an allocated, live slot.
    fn is_live_slot(&self, idx: u32) -> bool {
        idx < self.len && self.widget[idx as usize].is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use shelf_render::{Color, IntSize};

    use super::*;
    use crate::layout::Padding;
    use crate::style::{Style, StyleRegistry};
    use crate::widget::{Blank, Measured, Widget};

    /// A `ByContent` leaf with a settable primary-axis extent.
    #[derive(Debug)]
    struct Fixed {
        main: u32,
    }

    impl Widget for Fixed {
        fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
            let size = input.orientation.size(self.main, input.cross);
            Measured::against(input.current, size)
        }

        fn paint(&self, canvas: &mut Canvas) {
            _ = canvas;
        }
    }

    /// Records paint and layout hook calls into a shared log.
    #[derive(Debug)]
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Widget for Probe {
        fn paint(&self, canvas: &mut Canvas) {
            _ = canvas;
            self.log.borrow_mut().push(format!("paint {}", self.name));
        }

        fn on_layout_changed(&mut self, geometry: &Geometry<'_>) {
            self.log
                .borrow_mut()
                .push(format!("layout {} {}", self.name, geometry.children.len()));
        }
    }

    fn run(store: &mut NodeStore, root: NodeId, ctx: LayoutContext, frame: &mut Pixmap) -> FrameState {
        let mut state = FrameState::new();
        store.absorb(&mut state);
        store.measure(root, ctx, &mut state);
        store.arrange(root, ctx, &mut state);
        store.redraw(root, frame, &mut state);
        state
    }

    fn panel(store: &mut NodeStore, size: IntSize) -> NodeId {
        let root = store.create_node(Blank, SizingMode::ByLayout);
        store.set_root_size(root, size);
        root
    }

    #[test]
    fn flexible_children_split_the_row() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(97, 20));
        store.set_padding(root, Padding::new(0, 1, 0));
        let kids: Vec<_> = (0..3)
            .map(|_| {
                let k = store.create_node(Blank, SizingMode::ByLayout);
                store.add_child(root, k);
                k
            })
            .collect();

        let mut frame = Pixmap::new(IntSize::new(97, 20));
        run(&mut store, root, ctx, &mut frame);

        let widths: Vec<_> = kids.iter().map(|&k| store.size(k).width).collect();
        assert_eq!(widths, vec![32, 32, 31]);
        let xs: Vec<_> = kids.iter().map(|&k| store.position(k).x).collect();
        assert_eq!(xs, vec![0, 33, 66]);
        assert!(kids.iter().all(|&k| store.size(k).height == 20));
    }

    #[test]
    fn fixed_and_flexible_share_space() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(200, 30));
        store.set_padding(root, Padding::new(5, 2, 3));
        let clock = store.create_node(Fixed { main: 50 }, SizingMode::ByContent);
        let tasks = store.create_node(Blank, SizingMode::ByLayout);
        store.add_child(root, tasks);
        store.add_child(root, clock);

        let mut frame = Pixmap::new(IntSize::new(200, 30));
        run(&mut store, root, ctx, &mut frame);

        // 200 - 2*5 padding - 50 clock - 2 gap.
        assert_eq!(store.size(tasks), IntSize::new(138, 24));
        assert_eq!(store.position(tasks), IntPoint::new(5, 3));
        assert_eq!(store.size(clock), IntSize::new(50, 24));
        assert_eq!(store.position(clock), IntPoint::new(145, 3));
    }

    #[test]
    fn vertical_panels_stack_top_to_bottom() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::VERTICAL;
        let root = panel(&mut store, IntSize::new(40, 100));
        let a = store.create_node(Fixed { main: 10 }, SizingMode::ByContent);
        let b = store.create_node(Fixed { main: 20 }, SizingMode::ByContent);
        store.add_child(root, a);
        store.add_child(root, b);

        let mut frame = Pixmap::new(IntSize::new(40, 100));
        run(&mut store, root, ctx, &mut frame);

        assert_eq!(store.rect(a), IntRect::from_xywh(0, 0, 40, 10));
        assert_eq!(store.rect(b), IntRect::from_xywh(0, 10, 40, 20));
    }

    #[test]
    fn border_reserves_space() {
        let mut styles = StyleRegistry::new();
        let framed = styles.register(Style::NONE.with_border(Color::BLACK, 2, 0));
        let mut store = NodeStore::new(Arc::new(styles));
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(50, 20));
        store.set_style(root, framed);
        let k = store.create_node(Blank, SizingMode::ByLayout);
        store.add_child(root, k);

        let mut frame = Pixmap::new(IntSize::new(50, 20));
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.rect(k), IntRect::from_xywh(2, 2, 46, 16));
    }

    #[test]
    fn child_growth_propagates_to_content_parent() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(300, 20));
        let tray = store.create_node(SumOfChildren, SizingMode::ByContent);
        let icon = store.create_node(Fixed { main: 16 }, SizingMode::ByContent);
        store.add_child(root, tray);
        store.add_child(tray, icon);

        let mut frame = Pixmap::new(IntSize::new(300, 20));
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.size(tray).width, 16);

        store.edit::<Fixed>(icon, |f| {
            f.main = 24;
            crate::widget::Invalidate::Size
        });
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.size(icon).width, 24);
        assert_eq!(store.size(tray).width, 24, "parent re-measured in the same pass");
        assert!(store.changed_this_pass(tray));
    }

    /// A `ByContent` container as wide as its children.
    #[derive(Debug)]
    struct SumOfChildren;

    impl Widget for SumOfChildren {
        fn measure_content(&mut self, input: &MeasureInput<'_>) -> Measured {
            let o = input.orientation;
            let main = input.children.iter().map(|&s| o.main(s)).sum();
            Measured::against(input.current, o.size(main, input.cross))
        }

        fn paint(&self, canvas: &mut Canvas) {
            _ = canvas;
        }
    }

    #[test]
    fn second_run_without_dirt_is_idempotent() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(120, 24));
        store.set_padding(root, Padding::new(2, 3, 1));
        let a = store.create_node(Fixed { main: 20 }, SizingMode::ByContent);
        let b = store.create_node(Blank, SizingMode::ByLayout);
        let c = store.create_node(Blank, SizingMode::ByLayout);
        for k in [a, b, c] {
            store.add_child(root, k);
        }

        let mut frame = Pixmap::new(IntSize::new(120, 24));
        run(&mut store, root, ctx, &mut frame);
        let before: Vec<_> = [root, a, b, c].iter().map(|&k| store.rect(k)).collect();
        assert!(!store.needs_frame());

        let state = run(&mut store, root, ctx, &mut frame);
        let after: Vec<_> = [root, a, b, c].iter().map(|&k| store.rect(k)).collect();
        assert_eq!(before, after);
        for k in [root, a, b, c] {
            assert!(!store.changed_this_pass(k), "{k:?} changed on a clean run");
        }
        assert_eq!(state.stats.measured, 0);
        assert_eq!(state.stats.painted, 0);
        assert!(state.damage.is_empty());
        assert_eq!(state.stats.composited, 4, "clean frames still composite");
    }

    #[test]
    fn visible_siblings_never_overlap() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(400, 30));
        store.set_padding(root, Padding::new(4, 2, 0));
        let mut kids = Vec::new();
        for i in 0..6 {
            let k = if i % 2 == 0 {
                store.create_node(Fixed { main: 10 + i }, SizingMode::ByContent)
            } else {
                store.create_node(Blank, SizingMode::ByLayout)
            };
            store.add_child(root, k);
            kids.push(k);
        }
        store.hide(kids[3], ctx);

        let mut frame = Pixmap::new(IntSize::new(400, 30));
        run(&mut store, root, ctx, &mut frame);

        let visible: Vec<_> = kids.iter().copied().filter(|&k| store.is_visible(k)).collect();
        for pair in visible.windows(2) {
            let a = store.rect(pair[0]);
            let b = store.rect(pair[1]);
            assert!(a.x1() <= i64::from(b.origin.x), "{a:?} overlaps {b:?}");
        }
    }

    #[test]
    fn hide_show_round_trip_restores_size() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(100, 20));
        let a = store.create_node(Fixed { main: 30 }, SizingMode::ByContent);
        let b = store.create_node(Blank, SizingMode::ByLayout);
        store.add_child(root, a);
        store.add_child(root, b);

        let mut frame = Pixmap::new(IntSize::new(100, 20));
        run(&mut store, root, ctx, &mut frame);
        let a_before = store.rect(a);
        let b_before = store.rect(b);
        assert_eq!(b_before.size.width, 70);

        store.hide(a, ctx);
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.size(a).width, 0);
        assert_eq!(store.rect(b), IntRect::from_xywh(0, 0, 100, 20));

        store.show(a);
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.rect(a), a_before);
        assert_eq!(store.rect(b), b_before);
    }

    #[test]
    fn cap_leaves_space_unused() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(97, 20));
        store.set_padding(root, Padding::new(0, 1, 0));
        store.set_max_flexible(root, 30);
        let kids: Vec<_> = (0..3)
            .map(|_| {
                let k = store.create_node(Blank, SizingMode::ByLayout);
                store.add_child(root, k);
                k
            })
            .collect();
        let mut frame = Pixmap::new(IntSize::new(97, 20));
        run(&mut store, root, ctx, &mut frame);
        assert!(kids.iter().all(|&k| store.size(k).width == 30));
        assert_eq!(store.position(kids[2]).x, 62);
    }

    #[test]
    fn draw_order_is_parent_then_children() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = store.create_node(
            Probe {
                name: "root",
                log: log.clone(),
            },
            SizingMode::ByLayout,
        );
        store.set_root_size(root, IntSize::new(20, 10));
        let c1 = store.create_node(
            Probe {
                name: "c1",
                log: log.clone(),
            },
            SizingMode::ByLayout,
        );
        let c2 = store.create_node(
            Probe {
                name: "c2",
                log: log.clone(),
            },
            SizingMode::ByLayout,
        );
        store.add_child(root, c1);
        store.add_child(root, c2);

        let mut frame = Pixmap::new(IntSize::new(20, 10));
        run(&mut store, root, ctx, &mut frame);

        let paints: Vec<_> = log
            .borrow()
            .iter()
            .filter(|l| l.starts_with("paint"))
            .cloned()
            .collect();
        assert_eq!(paints, vec!["paint root", "paint c1", "paint c2"]);
        assert!(
            log.borrow().contains(&"layout root 2".to_owned()),
            "root hears about its children moving"
        );
    }

    #[test]
    fn later_siblings_composite_on_top() {
        let mut styles = StyleRegistry::new();
        let red = styles.register(Style::filled(Color::from_rgb8(255, 0, 0)));
        let blue = styles.register(Style::filled(Color::from_rgb8(0, 0, 255)));
        let green = styles.register(Style::filled(Color::from_rgb8(0, 255, 0)));
        let mut store = NodeStore::new(Arc::new(styles));
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(20, 10));
        store.set_style(root, red);
        store.set_padding(root, Padding::new(2, 0, 2));
        let c1 = store.create_node(Blank, SizingMode::ByLayout);
        let c2 = store.create_node(Blank, SizingMode::ByLayout);
        store.set_style(c1, blue);
        store.set_style(c2, green);
        store.add_child(root, c1);
        store.add_child(root, c2);

        let mut frame = Pixmap::new(IntSize::new(20, 10));
        run(&mut store, root, ctx, &mut frame);

        assert_eq!(frame.pixel(0, 0), Some([255, 0, 0, 255]), "root padding");
        assert_eq!(frame.pixel(3, 5), Some([0, 0, 255, 255]), "c1 over root");
        assert_eq!(frame.pixel(15, 5), Some([0, 255, 0, 255]), "c2 over root");
    }

    #[test]
    fn repaint_damages_only_dirty_nodes() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(100, 20));
        let a = store.create_node(Fixed { main: 30 }, SizingMode::ByContent);
        let b = store.create_node(Fixed { main: 30 }, SizingMode::ByContent);
        store.add_child(root, a);
        store.add_child(root, b);
        let mut frame = Pixmap::new(IntSize::new(100, 20));
        run(&mut store, root, ctx, &mut frame);

        store.mark_dirty_paint(b);
        let state = run(&mut store, root, ctx, &mut frame);
        assert_eq!(state.stats.painted, 1);
        assert_eq!(state.damage, DamageRegion::Rects(vec![store.rect(b)]));
        assert!(!store.is_dirty_paint(b));
    }

    #[test]
    fn zero_sized_nodes_have_no_buffer() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(10, 10));
        let empty = store.create_node(Fixed { main: 0 }, SizingMode::ByContent);
        store.add_child(root, empty);
        let mut frame = Pixmap::new(IntSize::new(10, 10));
        run(&mut store, root, ctx, &mut frame);
        assert!(store.pixmap(empty).is_none());
        assert!(store.pixmap(root).is_some());
    }

    #[test]
    fn marks_on_destroyed_nodes_are_dropped() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(10, 10));
        let gone = store.create_node(Blank, SizingMode::ByLayout);
        store.add_child(root, gone);
        store.mark_dirty_size(gone);
        store.remove_from_parent(gone);
        store.destroy_node(gone);
        let mut frame = Pixmap::new(IntSize::new(10, 10));
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn nested_layout_parent_positions_content_children() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(100, 20));
        let row = store.create_node(Blank, SizingMode::ByLayout);
        store.add_child(root, row);
        let a = store.create_node(Fixed { main: 7 }, SizingMode::ByContent);
        let b = store.create_node(Fixed { main: 9 }, SizingMode::ByContent);
        store.add_child(row, a);
        store.add_child(row, b);
        let mut frame = Pixmap::new(IntSize::new(100, 20));
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.size(row).width, 100);
        assert_eq!(store.position(a).x, 0);
        assert_eq!(store.position(b).x, 7);
    }

    #[test]
    fn padding_change_remeasures_content_children() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(100, 30));
        let child = store.create_node(Fixed { main: 10 }, SizingMode::ByContent);
        store.add_child(root, child);
        let mut frame = Pixmap::new(IntSize::new(100, 30));
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.rect(child), IntRect::from_xywh(0, 0, 10, 30));

        store.set_padding(root, Padding::new(0, 0, 5));
        let state = run(&mut store, root, ctx, &mut frame);
        assert_eq!(state.stats.measured, 1);
        assert_eq!(store.rect(child), IntRect::from_xywh(0, 5, 10, 20));

        // Same offer again: nothing to measure.
        store.mark_dirty_paint(root);
        let state = run(&mut store, root, ctx, &mut frame);
        assert_eq!(state.stats.measured, 0);
    }

    #[test]
    fn border_change_remeasures_content_children() {
        let mut styles = StyleRegistry::new();
        let framed = styles.register(Style::NONE.with_border(Color::BLACK, 4, 0));
        let mut store = NodeStore::new(Arc::new(styles));
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(100, 30));
        let row = store.create_node(Blank, SizingMode::ByLayout);
        store.add_child(root, row);
        let leaf = store.create_node(Fixed { main: 10 }, SizingMode::ByContent);
        store.add_child(row, leaf);
        let mut frame = Pixmap::new(IntSize::new(100, 30));
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.rect(leaf), IntRect::from_xywh(0, 0, 10, 30));

        store.set_style(root, framed);
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.rect(row), IntRect::from_xywh(4, 4, 92, 22));
        assert_eq!(store.rect(leaf), IntRect::from_xywh(4, 4, 10, 22));
    }

    #[test]
    fn oversized_padding_saturates() {
        let mut store = NodeStore::default();
        let ctx = LayoutContext::HORIZONTAL;
        let root = panel(&mut store, IntSize::new(100, 30));
        store.set_padding(root, Padding::new(u32::MAX, 0, u32::MAX));
        let flex = store.create_node(Blank, SizingMode::ByLayout);
        let leaf = store.create_node(Fixed { main: 10 }, SizingMode::ByContent);
        store.add_child(root, flex);
        store.add_child(root, leaf);
        let mut frame = Pixmap::new(IntSize::new(100, 30));
        run(&mut store, root, ctx, &mut frame);
        assert_eq!(store.size(flex), IntSize::ZERO);
        assert_eq!(store.size(leaf), IntSize::new(10, 0));
    }
}
