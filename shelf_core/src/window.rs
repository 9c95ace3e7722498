// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-level panel windows, one per monitor.

use std::sync::Arc;

use shelf_render::{IntPoint, IntSize, Pixmap};

use crate::backend::Presenter;
use crate::layout::{LayoutContext, Orientation, SizingMode};
use crate::node::{NodeId, NodeStore};
use crate::output::OutputId;
use crate::scheduler::{FrameReport, Scheduler};
use crate::style::StyleRegistry;
use crate::trace::Tracer;
use crate::widget::Widget;

/// One top-level window: a node tree, its frame buffer, and its scheduler.
///
/// The root node is created with the window. A `ByLayout` root is sized by
/// the window system through [`resize`](Self::resize); a `ByContent` root
/// (a tooltip window) sizes the window itself.
#[derive(Debug)]
pub struct PanelWindow {
    store: NodeStore,
    root: NodeId,
    scheduler: Scheduler,
    frame: Pixmap,
    pending_size: Option<IntSize>,
    full_damage: bool,
}

impl PanelWindow {
    /// Creates a window on `output` whose root is sized by the window system.
    #[must_use]
    pub fn new<W: Widget>(
        output: OutputId,
        ctx: LayoutContext,
        styles: Arc<StyleRegistry>,
        root: W,
        size: IntSize,
    ) -> Self {
        let mut window = Self::with_root(output, ctx, styles, root, SizingMode::ByLayout);
        window.resize(size);
        window
    }

    /// Creates a window whose root has the given sizing mode.
    #[must_use]
    pub fn with_root<W: Widget>(
        output: OutputId,
        ctx: LayoutContext,
        styles: Arc<StyleRegistry>,
        root: W,
        mode: SizingMode,
    ) -> Self {
        let mut store = NodeStore::new(styles);
        let root = store.create_node(root, mode);
        Self {
            store,
            root,
            scheduler: Scheduler::new(output, ctx),
            frame: Pixmap::new(IntSize::ZERO),
            pending_size: None,
            full_damage: true,
        }
    }

    /// Monitor this window is shown on.
    #[must_use]
    pub fn output(&self) -> OutputId {
        self.scheduler.output()
    }

    /// The window's layout context.
    #[must_use]
    pub fn context(&self) -> LayoutContext {
        self.scheduler.context()
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The window's node tree.
    #[must_use]
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// The window's node tree, for building and invalidating.
    pub fn store_mut(&mut self) -> &mut NodeStore {
        &mut self.store
    }

    /// The last composited frame.
    #[must_use]
    pub fn frame(&self) -> &Pixmap {
        &self.frame
    }

    /// Requests a new window size, applied at the start of the next frame.
    ///
    /// The next frame re-lays out the whole tree and is fully damaged.
    pub fn resize(&mut self, size: IntSize) {
        if self.pending_size.is_none() && self.store.size(self.root) == size {
            return;
        }
        self.pending_size = Some(size);
    }

    /// Switches the panel between horizontal and vertical.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.scheduler.context().orientation == orientation {
            return;
        }
        self.scheduler.set_context(LayoutContext { orientation });
        self.store.mark_subtree_dirty(self.root);
        self.full_damage = true;
    }

    /// Whether the next [`tick`](Self::tick) will run the passes.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.pending_size.is_some() || self.store.needs_frame()
    }

    /// Runs a frame if anything is dirty.
    pub fn tick(&mut self, presenter: &mut dyn Presenter) -> Option<FrameReport> {
        self.tick_traced(presenter, &mut Tracer::none())
    }

    /// Like [`tick`](Self::tick), reporting to `tracer`.
    pub fn tick_traced(
        &mut self,
        presenter: &mut dyn Presenter,
        tracer: &mut Tracer<'_>,
    ) -> Option<FrameReport> {
        self.needs_frame()
            .then(|| self.run_passes_traced(presenter, tracer))
    }

    /// Runs a frame unconditionally.
    pub fn run_passes(&mut self, presenter: &mut dyn Presenter) -> FrameReport {
        self.run_passes_traced(presenter, &mut Tracer::none())
    }

    /// Like [`run_passes`](Self::run_passes), reporting to `tracer`.
    pub fn run_passes_traced(
        &mut self,
        presenter: &mut dyn Presenter,
        tracer: &mut Tracer<'_>,
    ) -> FrameReport {
        if let Some(size) = self.pending_size.take() {
            if self.store.size(self.root) != size {
                self.store.set_root_size(self.root, size);
                self.full_damage = true;
            }
        }
        let full = core::mem::take(&mut self.full_damage);
        self.scheduler.run(
            &mut self.store,
            self.root,
            &mut self.frame,
            full,
            presenter,
            tracer,
        )
    }

    /// Returns the deepest visible node under `point`.
    #[must_use]
    pub fn node_at(&self, point: IntPoint) -> Option<NodeId> {
        self.store.node_at(self.root, point)
    }

    /// Returns the tooltip text for `point`.
    #[must_use]
    pub fn tooltip_at(&self, point: IntPoint) -> Option<String> {
        self.store.tooltip_at(self.root, point)
    }
}

/// The panel windows of all monitors.
///
/// Each monitor has at most one window. All windows share one style
/// registry; their trees are independent.
#[derive(Debug, Default)]
pub struct PanelSet {
    windows: Vec<PanelWindow>,
}

impl PanelSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a window.
    ///
    /// # Panics
    ///
    /// Panics if a window for the same output is already present.
    pub fn insert(&mut self, window: PanelWindow) {
        let output = window.output();
        assert!(
            self.get(output).is_none(),
            "output {output:?} already has a panel window"
        );
        self.windows.push(window);
    }

    /// Removes and returns the window on `output`, e.g. when a monitor is
    /// unplugged.
    pub fn remove(&mut self, output: OutputId) -> Option<PanelWindow> {
        let pos = self.windows.iter().position(|w| w.output() == output)?;
        Some(self.windows.remove(pos))
    }

    /// Returns the window on `output`.
    #[must_use]
    pub fn get(&self, output: OutputId) -> Option<&PanelWindow> {
        self.windows.iter().find(|w| w.output() == output)
    }

    /// Returns the window on `output` mutably.
    pub fn get_mut(&mut self, output: OutputId) -> Option<&mut PanelWindow> {
        self.windows.iter_mut().find(|w| w.output() == output)
    }

    /// Iterates over the windows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PanelWindow> {
        self.windows.iter()
    }

    /// Iterates mutably over the windows in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PanelWindow> {
        self.windows.iter_mut()
    }

    /// Number of windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether the set has no windows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Whether any window has pending work.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.windows.iter().any(PanelWindow::needs_frame)
    }

    /// Ticks every window, returning the reports of those that ran.
    pub fn tick_all(&mut self, presenter: &mut dyn Presenter) -> Vec<FrameReport> {
        self.windows
            .iter_mut()
            .filter_map(|w| w.tick(presenter))
            .collect()
    }
}
