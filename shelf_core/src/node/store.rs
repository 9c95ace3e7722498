// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays node storage with allocation, topology, and invalidation.

use std::sync::Arc;

use shelf_render::{IntPoint, IntRect, IntSize, Pixmap};
use understory_dirty::{CycleHandling, DirtyTracker};

use super::id::{INVALID, NodeId};
use super::traverse::Children;
use crate::dirty;
use crate::layout::{LayoutContext, LayoutParams, Padding, SizingMode};
use crate::style::{StyleId, StyleRegistry};
use crate::widget::{Invalidate, Widget};

/// Struct-of-arrays storage for all nodes of one panel window.
///
/// Nodes are addressed by [`NodeId`] handles. Internally, each node occupies
/// a slot in parallel arrays. Destroyed nodes are recycled via a free list,
/// and generation counters prevent stale handle access.
///
/// Invalidations ([`mark_dirty_size`](Self::mark_dirty_size),
/// [`mark_dirty_paint`](Self::mark_dirty_paint), topology edits) are queued
/// in a dirty tracker and only become node flags when the next frame
/// [absorbs](Self::absorb) them.
#[derive(Debug)]
pub struct NodeStore {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Inputs (set by owners) --
    pub(crate) widget: Vec<Option<Box<dyn Widget>>>,
    pub(crate) sizing: Vec<SizingMode>,
    pub(crate) style: Vec<StyleId>,
    pub(crate) params: Vec<LayoutParams>,
    pub(crate) visible: Vec<bool>,

    // -- Computed (written by passes) --
    pub(crate) position: Vec<IntPoint>,
    pub(crate) size: Vec<IntSize>,
    pub(crate) dirty_size: Vec<bool>,
    /// Cross extent offered at the last content measurement.
    pub(crate) measured_cross: Vec<u32>,
    pub(crate) dirty_paint: Vec<bool>,
    pub(crate) changed: Vec<bool>,
    pub(crate) pixmap: Vec<Option<Pixmap>>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Invalidation inbox --
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) frame_requested: bool,

    pub(crate) styles: Arc<StyleRegistry>,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new(Arc::new(StyleRegistry::new()))
    }
}

impl NodeStore {
    /// Creates an empty node store resolving styles through `styles`.
    #[must_use]
    pub fn new(styles: Arc<StyleRegistry>) -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            widget: Vec::new(),
            sizing: Vec::new(),
            style: Vec::new(),
            params: Vec::new(),
            visible: Vec::new(),
            position: Vec::new(),
            size: Vec::new(),
            dirty_size: Vec::new(),
            measured_cross: Vec::new(),
            dirty_paint: Vec::new(),
            changed: Vec::new(),
            pixmap: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            frame_requested: false,
            styles,
        }
    }

    /// Returns the style registry shared by this store.
    #[must_use]
    pub fn styles(&self) -> &Arc<StyleRegistry> {
        &self.styles
    }

    // -- Allocation API --

    /// Creates a new node and returns its handle.
    ///
    /// The node starts visible, detached, with zero size, no style, and
    /// default padding. Both its size and its paint are queued dirty.
    pub fn create_node<W: Widget>(&mut self, widget: W, mode: SizingMode) -> NodeId {
        let widget: Box<dyn Widget> = Box::new(widget);
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let i = idx as usize;
            self.generation[i] += 1;
            self.parent[i] = INVALID;
            self.first_child[i] = INVALID;
            self.next_sibling[i] = INVALID;
            self.prev_sibling[i] = INVALID;
            self.widget[i] = Some(widget);
            self.sizing[i] = mode;
            self.style[i] = StyleId::NONE;
            self.params[i] = LayoutParams::default();
            self.visible[i] = true;
            self.position[i] = IntPoint::ZERO;
            self.size[i] = IntSize::ZERO;
            self.dirty_size[i] = false;
            self.measured_cross[i] = 0;
            self.dirty_paint[i] = false;
            self.changed[i] = false;
            self.pixmap[i] = None;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.widget.push(Some(widget));
            self.sizing.push(mode);
            self.style.push(StyleId::NONE);
            self.params.push(LayoutParams::default());
            self.visible.push(true);
            self.position.push(IntPoint::ZERO);
            self.size.push(IntSize::ZERO);
            self.dirty_size.push(false);
            self.measured_cross.push(0);
            self.dirty_paint.push(false);
            self.changed.push(false);
            self.pixmap.push(None);
            self.generation.push(0);
            idx
        };

        self.mark_size_idx(idx);
        self.mark_paint_idx(idx);

        NodeId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a node, freeing its slot for reuse.
    ///
    /// Drops the widget and releases the pixel buffer. The style record is
    /// shared and left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the node has children (remove them first) or if the handle
    /// is stale.
    pub fn destroy_node(&mut self, id: NodeId) {
        self.validate(id);
        let idx = id.idx;
        assert!(
            self.first_child[idx as usize] == INVALID,
            "cannot destroy node with children"
        );

        if self.parent[idx as usize] != INVALID {
            let p = self.parent[idx as usize];
            self.unlink_from_parent(idx);
            self.mark_topology_idx(p);
        }

        self.dirty.remove_key(idx);

        self.widget[idx as usize] = None;
        self.pixmap[idx as usize] = None;
        self.dirty_size[idx as usize] = false;
        self.dirty_paint[idx as usize] = false;

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.free_list.push(idx);
    }

    /// Destroys a node and all of its descendants, children first.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_subtree(&mut self, id: NodeId) {
        self.validate(id);
        loop {
            let child = self.first_child[id.idx as usize];
            if child == INVALID {
                break;
            }
            let child = NodeId {
                idx: child,
                generation: self.generation[child as usize],
            };
            self.destroy_subtree(child);
        }
        self.destroy_node(id);
    }

    /// Returns whether the given handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    // -- Topology API --

    /// Adds `child` as the last child of `parent`.
    ///
    /// The parent is queued for re-layout and repaint; the child is queued
    /// for re-measurement under its new parent.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, or if `child` already has a parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.validate(parent);
        self.validate(child);
        let c = child.idx;
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );
        self.link_last(parent.idx, c);
    }

    /// Removes `child` from its current parent.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node has no parent.
    pub fn remove_from_parent(&mut self, child: NodeId) {
        self.validate(child);
        let c = child.idx;
        assert!(self.parent[c as usize] != INVALID, "node has no parent");

        let p = self.parent[c as usize];
        self.unlink_from_parent(c);
        self.mark_topology_idx(p);
    }

    /// Moves `child` to be the last child of `new_parent`.
    ///
    /// If `child` already has a parent, it is removed first.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn reparent(&mut self, child: NodeId, new_parent: NodeId) {
        self.validate(child);
        self.validate(new_parent);

        if self.parent[child.idx as usize] != INVALID {
            let old_p = self.parent[child.idx as usize];
            self.unlink_from_parent(child.idx);
            self.mark_topology_idx(old_p);
        }

        self.link_last(new_parent.idx, child.idx);
    }

    /// Inserts `child` before `sibling` in the sibling list.
    ///
    /// `child` must not already have a parent. `sibling` must have a parent.
    ///
    /// # Panics
    ///
    /// Panics if handles are stale, `child` already has a parent, or `sibling`
    /// has no parent.
    pub fn insert_before(&mut self, child: NodeId, sibling: NodeId) {
        self.validate(child);
        self.validate(sibling);
        let c = child.idx;
        let s = sibling.idx;
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );
        let p = self.parent[s as usize];
        assert!(p != INVALID, "sibling has no parent");

        self.parent[c as usize] = p;
        self.next_sibling[c as usize] = s;
        self.prev_sibling[c as usize] = self.prev_sibling[s as usize];

        if self.prev_sibling[s as usize] != INVALID {
            self.next_sibling[self.prev_sibling[s as usize] as usize] = c;
        } else {
            // `sibling` was the first child.
            self.first_child[p as usize] = c;
        }
        self.prev_sibling[s as usize] = c;

        self.mark_topology_idx(p);
        self.mark_size_idx(c);
    }

    /// Returns the parent of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        self.handle(self.parent[id.idx as usize])
    }

    /// Returns an iterator over the direct children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the live nodes that have no parent.
    #[must_use]
    pub fn roots(&self) -> Vec<NodeId> {
        let mut roots = Vec::new();
        for idx in 0..self.len {
            if self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx) {
                roots.push(NodeId {
                    idx,
                    generation: self.generation[idx as usize],
                });
            }
        }
        roots
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns how the node obtains its primary-axis size.
    #[must_use]
    pub fn sizing_mode(&self, id: NodeId) -> SizingMode {
        self.validate(id);
        self.sizing[id.idx as usize]
    }

    /// Returns the node's style handle.
    #[must_use]
    pub fn style(&self, id: NodeId) -> StyleId {
        self.validate(id);
        self.style[id.idx as usize]
    }

    /// Returns the node's layout parameters.
    #[must_use]
    pub fn layout_params(&self, id: NodeId) -> LayoutParams {
        self.validate(id);
        self.params[id.idx as usize]
    }

    /// Returns whether the node itself is visible.
    ///
    /// A visible node under a hidden ancestor is still skipped by the passes.
    #[must_use]
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.validate(id);
        self.visible[id.idx as usize]
    }

    /// Returns the node's position in window coordinates.
    ///
    /// Only valid after a layout pass.
    #[must_use]
    pub fn position(&self, id: NodeId) -> IntPoint {
        self.validate(id);
        self.position[id.idx as usize]
    }

    /// Returns the node's size, border included.
    #[must_use]
    pub fn size(&self, id: NodeId) -> IntSize {
        self.validate(id);
        self.size[id.idx as usize]
    }

    /// Returns the node's rectangle in window coordinates.
    #[must_use]
    pub fn rect(&self, id: NodeId) -> IntRect {
        self.validate(id);
        self.rect_at(id.idx)
    }

    /// Whether the node's size flag is set.
    ///
    /// Queued invalidations only show up here after [`absorb`](Self::absorb).
    #[must_use]
    pub fn is_dirty_size(&self, id: NodeId) -> bool {
        self.validate(id);
        self.dirty_size[id.idx as usize]
    }

    /// Whether the node's paint flag is set.
    #[must_use]
    pub fn is_dirty_paint(&self, id: NodeId) -> bool {
        self.validate(id);
        self.dirty_paint[id.idx as usize]
    }

    /// Whether the last pass sequence changed this node's size or position.
    #[must_use]
    pub fn changed_this_pass(&self, id: NodeId) -> bool {
        self.validate(id);
        self.changed[id.idx as usize]
    }

    /// Returns the node's cached pixel buffer, if one is allocated.
    #[must_use]
    pub fn pixmap(&self, id: NodeId) -> Option<&Pixmap> {
        self.validate(id);
        self.pixmap[id.idx as usize].as_ref()
    }

    /// Returns the node's widget as a trait object.
    #[must_use]
    pub fn widget_dyn(&self, id: NodeId) -> Option<&dyn Widget> {
        self.validate(id);
        self.widget[id.idx as usize].as_deref()
    }

    /// Returns the node's widget if it is a `W`.
    #[must_use]
    pub fn widget<W: Widget>(&self, id: NodeId) -> Option<&W> {
        let any: &dyn core::any::Any = self.widget_dyn(id)?;
        any.downcast_ref::<W>()
    }

    /// Returns the node's widget mutably if it is a `W`.
    ///
    /// No invalidation is recorded; prefer [`edit`](Self::edit).
    pub fn widget_mut<W: Widget>(&mut self, id: NodeId) -> Option<&mut W> {
        self.validate(id);
        let any: &mut dyn core::any::Any = self.widget[id.idx as usize].as_deref_mut()?;
        any.downcast_mut::<W>()
    }

    // -- Mutation API (queues invalidations) --

    /// Runs `f` on the node's widget and records what it reports.
    ///
    /// Returns `None` without calling `f` if the widget is not a `W`.
    pub fn edit<W: Widget>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut W) -> Invalidate,
    ) -> Option<Invalidate> {
        let inv = f(self.widget_mut::<W>(id)?);
        match inv {
            Invalidate::Nothing => {}
            Invalidate::Paint => self.mark_paint_idx(id.idx),
            Invalidate::Size => {
                self.mark_size_idx(id.idx);
                self.mark_paint_idx(id.idx);
            }
        }
        Some(inv)
    }

    /// Queues a content-size invalidation for the node.
    ///
    /// The node is also repainted, since new content means new pixels.
    pub fn mark_dirty_size(&mut self, id: NodeId) {
        self.validate(id);
        self.mark_size_idx(id.idx);
        self.mark_paint_idx(id.idx);
    }

    /// Queues a repaint of the node without re-layout.
    pub fn mark_dirty_paint(&mut self, id: NodeId) {
        self.validate(id);
        self.mark_paint_idx(id.idx);
    }

    /// Sets the node's style handle.
    ///
    /// Border width takes part in layout, so this queues both size and paint.
    pub fn set_style(&mut self, id: NodeId, style: StyleId) {
        self.validate(id);
        if self.style[id.idx as usize] == style {
            return;
        }
        self.style[id.idx as usize] = style;
        self.mark_size_idx(id.idx);
        self.mark_paint_idx(id.idx);
    }

    /// Sets the node's padding.
    pub fn set_padding(&mut self, id: NodeId, padding: Padding) {
        self.validate(id);
        if self.params[id.idx as usize].padding == padding {
            return;
        }
        self.params[id.idx as usize].padding = padding;
        self.mark_size_idx(id.idx);
        self.mark_paint_idx(id.idx);
    }

    /// Sets the per-child cap for the node's flexible children; `0` lifts it.
    pub fn set_max_flexible(&mut self, id: NodeId, max: u32) {
        self.validate(id);
        if self.params[id.idx as usize].max_flexible == max {
            return;
        }
        self.params[id.idx as usize].max_flexible = max;
        self.mark_size_idx(id.idx);
    }

    /// Hides the node and its subtree.
    ///
    /// The node's primary-axis size drops to zero right away so it stops
    /// taking space, and the parent is queued for re-layout. Hiding a hidden
    /// node does nothing.
    pub fn hide(&mut self, id: NodeId, ctx: LayoutContext) {
        self.validate(id);
        let i = id.idx as usize;
        if !self.visible[i] {
            return;
        }
        self.visible[i] = false;
        let cross = ctx.orientation.cross(self.size[i]);
        self.size[i] = ctx.orientation.size(0, cross);
        self.pixmap[i] = None;

        let p = self.parent[i];
        if p != INVALID {
            self.mark_size_idx(p);
            self.mark_paint_idx(p);
        } else {
            self.frame_requested = true;
        }
    }

    /// Shows a hidden node.
    ///
    /// The node and its parent are queued for re-layout. Showing a visible
    /// node does nothing.
    pub fn show(&mut self, id: NodeId) {
        self.validate(id);
        let i = id.idx as usize;
        if self.visible[i] {
            return;
        }
        self.visible[i] = true;
        self.mark_size_idx(id.idx);
        self.mark_paint_idx(id.idx);

        let p = self.parent[i];
        if p != INVALID {
            self.mark_size_idx(p);
            self.mark_paint_idx(p);
        }
    }

    /// Sets the size of a root node.
    ///
    /// Roots are sized by the window system, not by a parent. The whole tree
    /// is queued for re-layout and repaint, since every interior extent may
    /// have changed.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node has a parent.
    pub fn set_root_size(&mut self, id: NodeId, size: IntSize) {
        self.validate(id);
        assert!(
            self.parent[id.idx as usize] == INVALID,
            "only roots can be resized directly"
        );
        if self.size[id.idx as usize] == size {
            return;
        }
        self.size[id.idx as usize] = size;
        self.pixmap[id.idx as usize] = None;
        self.mark_subtree(id.idx);
    }

    /// Queues size and paint for the node and all of its descendants.
    ///
    /// Used when a window-wide input such as orientation changes.
    pub fn mark_subtree_dirty(&mut self, id: NodeId) {
        self.validate(id);
        self.mark_subtree(id.idx);
    }

    /// Whether queued invalidations are waiting for the next frame.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.frame_requested
    }

    // -- Raw-index accessors --

    /// Returns the rectangle at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn rect_at(&self, idx: u32) -> IntRect {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        IntRect::new(self.position[idx as usize], self.size[idx as usize])
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: NodeId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale NodeId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Builds a handle for a raw index, or `None` for [`INVALID`].
    pub(crate) fn handle(&self, idx: u32) -> Option<NodeId> {
        if idx == INVALID {
            None
        } else {
            Some(NodeId {
                idx,
                generation: self.generation[idx as usize],
            })
        }
    }

    /// Border width of the node's style.
    pub(crate) fn border_at(&self, idx: u32) -> u32 {
        self.styles.get(self.style[idx as usize]).border.width
    }

    pub(crate) fn mark_size_idx(&mut self, idx: u32) {
        self.dirty.mark(idx, dirty::SIZE);
        self.frame_requested = true;
    }

    pub(crate) fn mark_paint_idx(&mut self, idx: u32) {
        self.dirty.mark(idx, dirty::PAINT);
        self.frame_requested = true;
    }

    fn mark_topology_idx(&mut self, idx: u32) {
        self.dirty.mark(idx, dirty::TOPOLOGY);
        self.frame_requested = true;
    }

    /// Queues size and paint for every node of the subtree rooted at `idx`.
    fn mark_subtree(&mut self, idx: u32) {
        self.mark_size_idx(idx);
        self.mark_paint_idx(idx);
        let mut child = self.first_child[idx as usize];
        while child != INVALID {
            self.mark_subtree(child);
            child = self.next_sibling[child as usize];
        }
    }

    /// Appends `c` to the child list of `p` and queues both.
    fn link_last(&mut self, p: u32, c: u32) {
        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }

        self.mark_topology_idx(p);
        self.mark_size_idx(c);
    }

    /// Removes `idx` from its parent's child list without touching dirty state.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }
}

#[cfg(test)]
mod tests {
    use shelf_render::Canvas;

    use super::*;
    use crate::layout::Orientation;
    use crate::widget::Blank;

    #[derive(Debug, Default)]
    struct Counter {
        value: u32,
    }

    impl Widget for Counter {
        fn paint(&self, canvas: &mut Canvas) {
            _ = canvas;
        }
    }

    fn node(store: &mut NodeStore) -> NodeId {
        store.create_node(Blank, SizingMode::ByLayout)
    }

    #[test]
    fn create_and_destroy() {
        let mut store = NodeStore::default();
        let id = node(&mut store);
        assert!(store.is_alive(id));
        assert_eq!(store.node_count(), 1);
        store.destroy_node(id);
        assert!(!store.is_alive(id));
        assert_eq!(store.node_count(), 0);
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut store = NodeStore::default();
        let id1 = node(&mut store);
        store.destroy_node(id1);
        let id2 = node(&mut store);
        // id2 reuses the same slot but has a different generation.
        assert!(!store.is_alive(id1));
        assert!(store.is_alive(id2));
        assert_eq!(id1.idx, id2.idx);
        assert_ne!(id1.generation, id2.generation);
    }

    #[test]
    fn add_child_and_query() {
        let mut store = NodeStore::default();
        let parent = node(&mut store);
        let child1 = node(&mut store);
        let child2 = node(&mut store);

        store.add_child(parent, child1);
        store.add_child(parent, child2);

        assert_eq!(store.parent(child1), Some(parent));
        assert_eq!(store.parent(child2), Some(parent));

        let kids: Vec<_> = store.children(parent).collect();
        assert_eq!(kids, vec![child1, child2]);
    }

    #[test]
    fn remove_from_parent_works() {
        let mut store = NodeStore::default();
        let parent = node(&mut store);
        let child = node(&mut store);

        store.add_child(parent, child);
        store.remove_from_parent(child);
        assert_eq!(store.parent(child), None);
        assert!(store.children(parent).next().is_none());
    }

    #[test]
    fn insert_before_works() {
        let mut store = NodeStore::default();
        let parent = node(&mut store);
        let a = node(&mut store);
        let b = node(&mut store);
        let c = node(&mut store);

        store.add_child(parent, a);
        store.add_child(parent, c);
        store.insert_before(b, c);
        let z = node(&mut store);
        store.insert_before(z, a);

        let kids: Vec<_> = store.children(parent).collect();
        assert_eq!(kids, vec![z, a, b, c]);
    }

    #[test]
    fn reparent_works() {
        let mut store = NodeStore::default();
        let p1 = node(&mut store);
        let p2 = node(&mut store);
        let child = node(&mut store);

        store.add_child(p1, child);
        store.reparent(child, p2);
        assert_eq!(store.parent(child), Some(p2));
        assert!(store.children(p1).next().is_none());
    }

    #[test]
    fn roots_returns_parentless_nodes() {
        let mut store = NodeStore::default();
        let a = node(&mut store);
        let b = node(&mut store);
        let c = node(&mut store);

        store.add_child(a, c);

        let roots = store.roots();
        assert!(roots.contains(&a));
        assert!(roots.contains(&b));
        assert!(!roots.contains(&c));
    }

    #[test]
    fn destroy_subtree_frees_descendants() {
        let mut store = NodeStore::default();
        let root = node(&mut store);
        let mid = node(&mut store);
        let leaf = node(&mut store);
        let keep = node(&mut store);
        store.add_child(root, mid);
        store.add_child(mid, leaf);
        store.add_child(root, keep);

        store.destroy_subtree(mid);
        assert!(!store.is_alive(mid));
        assert!(!store.is_alive(leaf));
        assert_eq!(store.children(root).collect::<Vec<_>>(), vec![keep]);
    }

    #[test]
    fn destroy_keeps_shared_style() {
        let mut styles = StyleRegistry::new();
        let red = styles.register(crate::style::Style::filled(shelf_render::Color::from_rgb8(
            255, 0, 0,
        )));
        let mut store = NodeStore::new(Arc::new(styles));
        let a = node(&mut store);
        let b = node(&mut store);
        store.set_style(a, red);
        store.set_style(b, red);
        store.destroy_node(a);
        assert_eq!(store.style(b), red);
        assert_eq!(store.styles().len(), 2);
    }

    #[test]
    #[should_panic(expected = "cannot destroy node with children")]
    fn destroy_with_children_panics() {
        let mut store = NodeStore::default();
        let parent = node(&mut store);
        let child = node(&mut store);
        store.add_child(parent, child);
        store.destroy_node(parent);
    }

    #[test]
    #[should_panic(expected = "child already has a parent")]
    fn double_parent_panics() {
        let mut store = NodeStore::default();
        let p1 = node(&mut store);
        let p2 = node(&mut store);
        let child = node(&mut store);
        store.add_child(p1, child);
        store.add_child(p2, child);
    }

    #[test]
    #[should_panic(expected = "stale NodeId")]
    fn destroyed_handle_panics_on_size() {
        let mut store = NodeStore::default();
        let id = node(&mut store);
        store.destroy_node(id);
        let _ = store.size(id);
    }

    #[test]
    #[should_panic(expected = "stale NodeId")]
    fn destroyed_handle_panics_on_mark() {
        let mut store = NodeStore::default();
        let id = node(&mut store);
        store.destroy_node(id);
        store.mark_dirty_paint(id);
    }

    #[test]
    #[should_panic(expected = "stale NodeId")]
    fn destroyed_handle_panics_on_add_child() {
        let mut store = NodeStore::default();
        let parent = node(&mut store);
        let child = node(&mut store);
        store.destroy_node(child);
        store.add_child(parent, child);
    }

    #[test]
    fn marks_are_queued_not_applied() {
        let mut store = NodeStore::default();
        let id = node(&mut store);
        assert!(store.needs_frame());
        assert!(
            !store.is_dirty_size(id),
            "flags only change when the frame absorbs the inbox"
        );
    }

    #[test]
    fn widget_downcast() {
        let mut store = NodeStore::default();
        let id = store.create_node(Counter { value: 3 }, SizingMode::ByContent);
        assert_eq!(store.widget::<Counter>(id).map(|c| c.value), Some(3));
        assert!(store.widget::<Blank>(id).is_none());

        if let Some(c) = store.widget_mut::<Counter>(id) {
            c.value = 4;
        }
        assert_eq!(store.widget::<Counter>(id).map(|c| c.value), Some(4));
    }

    #[test]
    fn edit_reports_invalidation() {
        let mut store = NodeStore::default();
        let id = store.create_node(Counter::default(), SizingMode::ByContent);
        let inv = store.edit::<Counter>(id, |c| {
            c.value += 1;
            Invalidate::Paint
        });
        assert_eq!(inv, Some(Invalidate::Paint));
        assert_eq!(store.edit::<Blank>(id, |_| Invalidate::Size), None);
    }

    #[test]
    fn hide_zeroes_primary_size_only() {
        let mut store = NodeStore::default();
        let parent = node(&mut store);
        let child = node(&mut store);
        store.add_child(parent, child);
        store.size[child.idx as usize] = IntSize::new(40, 20);

        store.hide(child, LayoutContext::HORIZONTAL);
        assert!(!store.is_visible(child));
        assert_eq!(store.size(child), IntSize::new(0, 20));

        store.show(child);
        assert!(store.is_visible(child));

        store.size[child.idx as usize] = IntSize::new(40, 20);
        store.hide(
            child,
            LayoutContext {
                orientation: Orientation::Vertical,
            },
        );
        assert_eq!(store.size(child), IntSize::new(40, 0));
    }

    #[test]
    #[should_panic(expected = "only roots can be resized directly")]
    fn resizing_a_child_panics() {
        let mut store = NodeStore::default();
        let parent = node(&mut store);
        let child = node(&mut store);
        store.add_child(parent, child);
        store.set_root_size(child, IntSize::new(1, 1));
    }
}
