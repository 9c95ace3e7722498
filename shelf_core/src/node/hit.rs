// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point queries against the laid-out tree.

use shelf_render::IntPoint;

use super::id::{INVALID, NodeId};
use super::store::NodeStore;

impl NodeStore {
    /// Returns the deepest visible node under `point`, starting at `root`.
    ///
    /// Later siblings are drawn on top, so they are searched first. Uses the
    /// geometry of the last layout pass.
    ///
    /// # Panics
    ///
    /// Panics if `root` is stale.
    #[must_use]
    pub fn node_at(&self, root: NodeId, point: IntPoint) -> Option<NodeId> {
        self.validate(root);
        self.hit(root.idx, point).and_then(|idx| self.handle(idx))
    }

    /// Returns the tooltip text for `point`.
    ///
    /// Asks the node under the point first, then its ancestors, and returns
    /// the first text found.
    ///
    /// # Panics
    ///
    /// Panics if `root` is stale.
    #[must_use]
    pub fn tooltip_at(&self, root: NodeId, point: IntPoint) -> Option<String> {
        self.validate(root);
        let mut idx = self.hit(root.idx, point)?;
        loop {
            if let Some(text) = self.widget[idx as usize]
                .as_ref()
                .and_then(|w| w.tooltip_text())
            {
                return Some(text);
            }
            if idx == root.idx {
                return None;
            }
            idx = self.parent[idx as usize];
            if idx == INVALID {
                return None;
            }
        }
    }

    fn hit(&self, idx: u32, point: IntPoint) -> Option<u32> {
        let i = idx as usize;
        if !self.visible[i] || !self.rect_at(idx).contains(point) {
            return None;
        }

        let mut hit = None;
        let mut child = self.first_child[i];
        while child != INVALID {
            if let Some(found) = self.hit(child, point) {
                hit = Some(found);
            }
            child = self.next_sibling[child as usize];
        }
        hit.or(Some(idx))
    }
}
